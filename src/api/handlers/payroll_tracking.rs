//! Handlers for `/payroll-tracking/claims` and `/payroll-tracking/refunds`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::models::{Claim, Document, Refund};

use super::super::request::{
    parse_body, CreateClaimRequest, CreateRefundRequest, UpdateClaimStatusRequest,
    UpdateRefundStatusRequest,
};
use super::super::response::{created, list, ok, ApiResult};
use super::super::state::AppState;

/// GET /payroll-tracking/claims
pub(super) async fn list_claims(State(state): State<AppState>) -> ApiResult<Vec<Claim>> {
    list(state.db().claims.find_all().await)
}

/// POST /payroll-tracking/claims
pub(super) async fn create_claim(
    State(state): State<AppState>,
    payload: Result<Json<CreateClaimRequest>, JsonRejection>,
) -> ApiResult<Claim> {
    let correlation_id = Uuid::new_v4();
    let claim = parse_body(payload)?.into_document()?;
    let claim = state.db().claims.insert(claim).await?;
    info!(
        correlation_id = %correlation_id,
        claim_id = %claim.id(),
        employee_id = %claim.employee_id,
        amount = %claim.amount,
        "Claim submitted"
    );
    created(claim)
}

/// GET /payroll-tracking/claims/{id}
pub(super) async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Claim> {
    ok(state.db().claims.find_by_id(&id).await?)
}

/// PATCH /payroll-tracking/claims/{id}/status
pub(super) async fn update_claim_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateClaimStatusRequest>, JsonRejection>,
) -> ApiResult<Claim> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(payload)?;
    let policy = state.policy();
    let claim = state
        .db()
        .claims
        .update(&id, |claim| request.apply(claim, policy))
        .await?;
    info!(
        correlation_id = %correlation_id,
        claim_id = %id,
        status = ?claim.status,
        "Claim reviewed"
    );
    ok(claim)
}

/// GET /payroll-tracking/refunds
pub(super) async fn list_refunds(State(state): State<AppState>) -> ApiResult<Vec<Refund>> {
    list(state.db().refunds.find_all().await)
}

/// POST /payroll-tracking/refunds
pub(super) async fn create_refund(
    State(state): State<AppState>,
    payload: Result<Json<CreateRefundRequest>, JsonRejection>,
) -> ApiResult<Refund> {
    let correlation_id = Uuid::new_v4();
    let refund = parse_body(payload)?.into_document()?;
    let refund = state.db().refunds.insert(refund).await?;
    info!(
        correlation_id = %correlation_id,
        refund_id = %refund.id(),
        employee_id = %refund.employee_id,
        amount = %refund.amount,
        "Refund scheduled"
    );
    created(refund)
}

/// GET /payroll-tracking/refunds/{id}
pub(super) async fn get_refund(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Refund> {
    ok(state.db().refunds.find_by_id(&id).await?)
}

/// PATCH /payroll-tracking/refunds/{id}/status
pub(super) async fn update_refund_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateRefundStatusRequest>, JsonRejection>,
) -> ApiResult<Refund> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(payload)?;
    let policy = state.policy();
    let refund = state
        .db()
        .refunds
        .update(&id, |refund| request.apply(refund, policy))
        .await?;
    info!(
        correlation_id = %correlation_id,
        refund_id = %id,
        status = ?refund.status,
        "Refund updated"
    );
    ok(refund)
}
