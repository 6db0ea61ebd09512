//! HTTP request handlers for the HR payroll API.
//!
//! Each handler performs exactly one store operation (the run calculation
//! reads the run, then its payslips) and answers with an
//! [`Envelope`](super::Envelope).

mod diagnostics;
mod offboarding;
mod payroll_execution;
mod payroll_tracking;
mod recruitment;

pub use diagnostics::DatabaseStatus;

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/test-db", get(diagnostics::test_db))
        .merge(recruitment_routes())
        .merge(offboarding_routes())
        .merge(payroll_tracking_routes())
        .merge(payroll_execution_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn recruitment_routes() -> Router<AppState> {
    use recruitment::*;

    Router::new()
        .route("/api/interviews", get(list_interviews).post(create_interview))
        .route(
            "/api/interviews/:id",
            get(get_interview).patch(update_interview),
        )
        .route(
            "/api/interviews/application/:application_id",
            get(list_interviews_for_application),
        )
        .route("/api/offers", get(list_offers).post(create_offer))
        .route("/api/offers/:id", get(get_offer).patch(update_offer))
        .route(
            "/api/offers/application/:application_id",
            get(list_offers_for_application),
        )
        .route("/api/contracts", get(list_contracts).post(create_contract))
        .route(
            "/api/contracts/:id",
            get(get_contract).patch(update_contract),
        )
}

fn offboarding_routes() -> Router<AppState> {
    use offboarding::*;

    Router::new()
        .route(
            "/api/terminations",
            get(list_terminations).post(create_termination),
        )
        .route("/api/terminations/:id", get(get_termination))
        .route("/api/terminations/:id/approve", post(approve_termination))
        .route(
            "/api/clearance-checklists",
            get(list_clearance_checklists).post(create_clearance_checklist),
        )
        .route(
            "/api/clearance-checklists/:id",
            get(get_clearance_checklist).patch(update_clearance_checklist),
        )
}

fn payroll_tracking_routes() -> Router<AppState> {
    use payroll_tracking::*;

    Router::new()
        .route("/payroll-tracking/claims", get(list_claims).post(create_claim))
        .route("/payroll-tracking/claims/:id", get(get_claim))
        .route(
            "/payroll-tracking/claims/:id/status",
            patch(update_claim_status),
        )
        .route(
            "/payroll-tracking/refunds",
            get(list_refunds).post(create_refund),
        )
        .route("/payroll-tracking/refunds/:id", get(get_refund))
        .route(
            "/payroll-tracking/refunds/:id/status",
            patch(update_refund_status),
        )
}

fn payroll_execution_routes() -> Router<AppState> {
    use payroll_execution::*;

    Router::new()
        .route("/payroll-execution/runs", get(list_runs).post(create_run))
        .route("/payroll-execution/runs/:id", get(get_run))
        .route("/payroll-execution/runs/:id/status", patch(update_run_status))
        .route(
            "/payroll-execution/runs/:id/calculation",
            get(run_calculation),
        )
        .route(
            "/payroll-execution/approvals",
            get(list_approvals).post(create_approval),
        )
        .route("/payroll-execution/approvals/:id", get(get_approval))
        .route(
            "/payroll-execution/approvals/run/:run_id",
            get(list_approvals_for_run),
        )
        .route(
            "/payroll-execution/approvals/:id/approve",
            post(approve_approval),
        )
        .route(
            "/payroll-execution/approvals/:id/reject",
            post(reject_approval),
        )
        .route(
            "/payroll-execution/signing-bonuses",
            get(list_signing_bonuses).post(create_signing_bonus),
        )
        .route(
            "/payroll-execution/signing-bonuses/:id",
            get(get_signing_bonus),
        )
        .route(
            "/payroll-execution/signing-bonuses/:id/status",
            patch(update_signing_bonus_status),
        )
        .route(
            "/payroll-execution/payslips",
            get(list_payslips).post(create_payslip),
        )
        .route("/payroll-execution/payslips/:id", get(get_payslip))
        .route(
            "/payroll-execution/payslips/:id/status",
            patch(update_payslip_status),
        )
        .route(
            "/payroll-execution/irregularities",
            get(list_irregularities).post(create_irregularity),
        )
        .route(
            "/payroll-execution/irregularities/:id/resolve",
            patch(resolve_irregularity),
        )
}
