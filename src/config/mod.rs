//! Configuration loading and management for the HR payroll service.
//!
//! This module provides functionality to load the service configuration
//! from a YAML file: listener address, storage location, workflow guard and
//! log output.
//!
//! # Example
//!
//! ```no_run
//! use hr_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Data directory: {:?}", config.config().storage.data_dir);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LoggingConfig, ServerConfig, ServiceConfig, StorageConfig, WorkflowConfig};
