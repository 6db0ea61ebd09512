//! HTTP API module for the HR payroll service.
//!
//! This module provides the REST endpoints for recruitment, offboarding,
//! payroll tracking and payroll execution records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{create_router, DatabaseStatus};
pub use request::{
    ApprovalDecisionRequest, ApproveTerminationRequest, CreateApprovalRequest, CreateClaimRequest,
    CreateClearanceChecklistRequest, CreateContractRequest, CreateInterviewRequest,
    CreateIrregularityRequest, CreateOfferRequest, CreatePayrollRunRequest, CreatePayslipRequest,
    CreateRefundRequest, CreateSigningBonusRequest, CreateTerminationRequest,
    ResolveIrregularityRequest, RunFilter, UpdateClaimStatusRequest,
    UpdateClearanceChecklistRequest, UpdateContractRequest, UpdateInterviewRequest,
    UpdateOfferRequest, UpdatePayrollRunStatusRequest, UpdateRefundStatusRequest,
    UpdateStatusRequest,
};
pub use response::{ApiErrorResponse, ApiResult, Envelope};
pub use state::AppState;
