//! Error types for the HR payroll service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating, storing and
//! transitioning records.

use thiserror::Error;

/// The main error type for the HR payroll service.
///
/// Every store operation and handler returns this error type. The HTTP layer
/// maps [`ServiceError::NotFound`] to 404 and every other variant to 500.
///
/// # Example
///
/// ```
/// use hr_payroll::error::ServiceError;
///
/// let error = ServiceError::NotFound {
///     resource: "Interview".to_string(),
///     id: "000000000000000000000000".to_string(),
/// };
/// assert_eq!(error.to_string(), "Interview not found: 000000000000000000000000");
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The identifier did not resolve to a stored document.
    #[error("{resource} not found: {id}")]
    NotFound {
        /// The record type that was looked up.
        resource: String,
        /// The identifier that was requested.
        id: String,
    },

    /// A document failed schema validation.
    #[error("{resource} validation failed: {message}")]
    Validation {
        /// The record type being validated.
        resource: String,
        /// A description of the failed constraints.
        message: String,
    },

    /// A status value outside the closed set for its workflow.
    #[error("`{value}` is not a valid {field} value (expected one of: {allowed})")]
    InvalidStatus {
        /// The field that was being set.
        field: String,
        /// The rejected value.
        value: String,
        /// Comma separated list of accepted values.
        allowed: String,
    },

    /// A status change that the workflow table does not allow.
    #[error("{resource} cannot move from {from} to {to}")]
    InvalidTransition {
        /// The record type whose status was being changed.
        resource: String,
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },

    /// The request body could not be decoded.
    #[error("Malformed request body: {message}")]
    MalformedBody {
        /// The decoder's description of the problem.
        message: String,
    },

    /// The query string could not be decoded.
    #[error("Malformed query string: {message}")]
    MalformedQuery {
        /// The decoder's description of the problem.
        message: String,
    },

    /// Reading or writing a collection snapshot failed.
    #[error("Storage error on collection '{collection}': {message}")]
    Storage {
        /// The collection being accessed.
        collection: String,
        /// A description of the I/O or encoding failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl ServiceError {
    /// Creates a not-found error for the given resource label and id.
    pub fn not_found(resource: &str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.into(),
        }
    }

    /// Creates a validation error for the given resource label.
    pub fn validation(resource: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            resource: resource.to_string(),
            message: message.into(),
        }
    }

    /// Returns true if this error represents a lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// A type alias for Results that return ServiceError.
pub type ServiceResult<T> = Result<T, ServiceError>;
