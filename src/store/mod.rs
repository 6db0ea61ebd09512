//! Document store.
//!
//! A [`Database`] holds one [`Collection`] per record type. Collections live
//! in memory and optionally mirror themselves to JSON snapshot files.

mod collection;
mod database;

pub use collection::Collection;
pub use database::{Backend, CollectionStats, Database};
