//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{ServiceError, ServiceResult};
use crate::workflow::TransitionPolicy;

use super::types::ServiceConfig;

/// Loads and provides access to the service configuration.
///
/// # File format
///
/// ```yaml
/// server:
///   host: 0.0.0.0
///   port: 8080
/// storage:
///   data_dir: ./data
/// workflow:
///   enforce_transitions: true
/// logging:
///   filter: hr_payroll=debug
///   json: false
/// ```
///
/// # Example
///
/// ```no_run
/// use hr_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml").unwrap();
/// println!("Binding to {}", loader.config().server.bind_address());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if the file is
    /// missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> ServiceResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ServiceError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            ServiceError::ConfigParseError { message, .. } => ServiceError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_payroll::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml("server:\n  port: 9000\n").unwrap();
    /// assert_eq!(loader.config().server.port, 9000);
    /// assert!(loader.config().workflow.enforce_transitions);
    /// ```
    pub fn from_yaml(content: &str) -> ServiceResult<Self> {
        // An empty document parses as null rather than an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config =
            serde_yaml::from_str::<ServiceConfig>(content).map_err(|e| {
                ServiceError::ConfigParseError {
                    path: "<inline>".to_string(),
                    message: e.to_string(),
                }
            })?;
        Ok(Self { config })
    }

    /// Wraps an already built configuration.
    pub fn from_config(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns a mutable reference for command line overrides.
    pub fn config_mut(&mut self) -> &mut ServiceConfig {
        &mut self.config
    }

    /// The transition policy selected by `workflow.enforce_transitions`.
    pub fn transition_policy(&self) -> TransitionPolicy {
        TransitionPolicy::new(self.config.workflow.enforce_transitions)
    }
}
