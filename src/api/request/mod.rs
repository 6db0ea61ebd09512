//! Request types for the HR payroll API.
//!
//! Create requests turn into documents through `into_document`, which checks
//! required fields and value ranges. Update requests apply a partial patch to
//! a stored document through `apply`, routing any status change through the
//! workflow tables.

mod offboarding;
mod payroll_execution;
mod payroll_tracking;
mod recruitment;

pub use offboarding::{
    ApproveTerminationRequest, CreateClearanceChecklistRequest, CreateTerminationRequest,
    UpdateClearanceChecklistRequest,
};
pub use payroll_execution::{
    ApprovalDecisionRequest, CreateApprovalRequest, CreateIrregularityRequest,
    CreatePayrollRunRequest, CreatePayslipRequest, CreateSigningBonusRequest,
    ResolveIrregularityRequest, RunFilter, UpdatePayrollRunStatusRequest, UpdateStatusRequest,
};
pub use payroll_tracking::{
    CreateClaimRequest, CreateRefundRequest, UpdateClaimStatusRequest, UpdateRefundStatusRequest,
};
pub use recruitment::{
    CreateContractRequest, CreateInterviewRequest, CreateOfferRequest, UpdateContractRequest,
    UpdateInterviewRequest, UpdateOfferRequest,
};

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, JsonRejection, QueryRejection},
        Query,
    },
    Json,
};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use crate::error::{ServiceError, ServiceResult};

/// Unwraps a JSON body, turning extractor rejections into service errors.
pub fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> ServiceResult<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            let message = match rejection {
                JsonRejection::JsonDataError(err) => err.body_text(),
                JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
                JsonRejection::MissingJsonContentType(_) => {
                    "Content-Type must be application/json".to_string()
                }
                other => other.body_text(),
            };
            Err(ServiceError::MalformedBody { message })
        }
    }
}

/// Decodes a body that may be absent.
///
/// An empty or whitespace-only body yields `T::default()` whatever the
/// `Content-Type` says; anything else must be valid JSON.
pub fn parse_optional_body<T: DeserializeOwned + Default>(
    payload: Result<Bytes, BytesRejection>,
) -> ServiceResult<T> {
    let bytes = payload.map_err(|rejection| ServiceError::MalformedBody {
        message: rejection.body_text(),
    })?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(&bytes).map_err(|err| ServiceError::MalformedBody {
        message: format!("Invalid JSON: {}", err),
    })
}

/// Unwraps a query string, turning extractor rejections into service errors.
pub fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> ServiceResult<T> {
    query
        .map(|Query(query)| query)
        .map_err(|rejection| ServiceError::MalformedQuery {
            message: rejection.body_text(),
        })
}

/// Collects field problems for one document before reporting them together.
#[derive(Debug)]
pub(crate) struct FieldCheck {
    resource: &'static str,
    problems: Vec<String>,
}

impl FieldCheck {
    pub(crate) fn new(resource: &'static str) -> Self {
        Self {
            resource,
            problems: Vec::new(),
        }
    }

    /// Records `field` as missing when `value` is `None`.
    pub(crate) fn required<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.problems.push(format!("{} is required", field));
        }
        value
    }

    /// Like [`FieldCheck::required`], also rejecting blank strings.
    pub(crate) fn text(&mut self, field: &str, value: Option<String>) -> Option<String> {
        let value = value.filter(|v| !v.trim().is_empty());
        self.required(field, value)
    }

    pub(crate) fn non_negative(&mut self, field: &str, value: Decimal) {
        if value < Decimal::ZERO {
            self.problems.push(format!("{} must not be negative", field));
        }
    }

    pub(crate) fn positive(&mut self, field: &str, value: Decimal) {
        if value <= Decimal::ZERO {
            self.problems.push(format!("{} must be greater than zero", field));
        }
    }

    pub(crate) fn fail(&mut self, problem: impl Into<String>) {
        self.problems.push(problem.into());
    }

    pub(crate) fn into_error(self) -> ServiceError {
        ServiceError::validation(self.resource, self.problems.join(", "))
    }

    pub(crate) fn finish(self) -> ServiceResult<()> {
        if self.problems.is_empty() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }
}
