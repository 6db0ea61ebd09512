//! Response types for the HR payroll API.
//!
//! Every handler answers with an [`Envelope`]: `{success: true, data,
//! count?}` on success or `{success: false, error}` on failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::{debug, warn};

use crate::error::ServiceError;

/// The JSON wrapper used by every endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    /// The operation succeeded.
    Success {
        /// The document or documents produced.
        data: T,
        /// Number of documents, for list responses.
        count: Option<usize>,
    },
    /// The operation failed.
    Failure {
        /// Error message passed through to the client.
        error: String,
    },
}

impl<T> Envelope<T> {
    /// Wraps a single result.
    pub fn success(data: T) -> Self {
        Self::Success { data, count: None }
    }

    /// Wraps an error message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    /// Returns true for the success variant.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl<T> Envelope<Vec<T>> {
    /// Wraps a list result together with its length.
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        Self::Success {
            data,
            count: Some(count),
        }
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success { data, count } => {
                let len = if count.is_some() { 3 } else { 2 };
                let mut state = serializer.serialize_struct("Envelope", len)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
                if let Some(count) = count {
                    state.serialize_field("count", count)?;
                }
                state.end()
            }
            Self::Failure { error } => {
                let mut state = serializer.serialize_struct("Envelope", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                state.end()
            }
        }
    }
}

/// A successful response: status code plus envelope.
pub type ApiSuccess<T> = (StatusCode, Json<Envelope<T>>);

/// Result type returned by handlers.
pub type ApiResult<T> = Result<ApiSuccess<T>, ApiErrorResponse>;

/// 200 with a single document.
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(Envelope::success(data))))
}

/// 201 with the created document.
pub fn created<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(Envelope::success(data))))
}

/// 200 with a list and its count.
pub fn list<T>(data: Vec<T>) -> ApiResult<Vec<T>> {
    Ok((StatusCode::OK, Json(Envelope::list(data))))
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The message placed in the envelope.
    pub message: String,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(Envelope::<()>::failure(self.message))).into_response()
    }
}

impl From<ServiceError> for ApiErrorResponse {
    fn from(error: ServiceError) -> Self {
        let status = if error.is_not_found() {
            debug!(error = %error, "Lookup miss");
            StatusCode::NOT_FOUND
        } else {
            warn!(error = %error, "Request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        ApiErrorResponse {
            status,
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_serialization() {
        let json = serde_json::to_value(Envelope::success(json!({"a": 1}))).unwrap();
        assert_eq!(json, json!({"success": true, "data": {"a": 1}}));
    }

    #[test]
    fn test_list_envelope_includes_count() {
        let json = serde_json::to_value(Envelope::list(vec![1, 2, 3])).unwrap();
        assert_eq!(json, json!({"success": true, "data": [1, 2, 3], "count": 3}));
    }

    #[test]
    fn test_failure_envelope_serialization() {
        let envelope = Envelope::<()>::failure("boom");
        assert!(!envelope.is_success());
        let json = serde_json::to_value(envelope).unwrap();
        assert_eq!(json, json!({"success": false, "error": "boom"}));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response: ApiErrorResponse = ServiceError::not_found("Offer", "x").into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.message, "Offer not found: x");
    }

    #[test]
    fn test_other_errors_map_to_500() {
        let response: ApiErrorResponse = ServiceError::validation("Offer", "bad").into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);

        let response: ApiErrorResponse = ServiceError::InvalidTransition {
            resource: "Offer".to_string(),
            from: "Draft".to_string(),
            to: "Accepted".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
