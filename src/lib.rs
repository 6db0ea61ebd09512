//! HR payroll records service.
//!
//! This crate stores recruitment, offboarding and payroll records in a
//! document store and exposes them over HTTP. Records with a closed status
//! set change status only along their workflow tables.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod workflow;
