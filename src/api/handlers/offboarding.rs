//! Handlers for `/api/terminations` and `/api/clearance-checklists`.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, JsonRejection},
        Path, State,
    },
    Json,
};
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{ClearanceChecklist, Document, Termination, TerminationStatus};
use crate::workflow::transition;

use super::super::request::{
    parse_body, parse_optional_body, ApproveTerminationRequest, CreateClearanceChecklistRequest,
    CreateTerminationRequest, UpdateClearanceChecklistRequest,
};
use super::super::response::{created, list, ok, ApiResult};
use super::super::state::AppState;

/// GET /api/terminations
pub(super) async fn list_terminations(
    State(state): State<AppState>,
) -> ApiResult<Vec<Termination>> {
    list(state.db().terminations.find_all().await)
}

/// POST /api/terminations
pub(super) async fn create_termination(
    State(state): State<AppState>,
    payload: Result<Json<CreateTerminationRequest>, JsonRejection>,
) -> ApiResult<Termination> {
    let correlation_id = Uuid::new_v4();
    let termination = parse_body(payload)?.into_document()?;
    let termination = state.db().terminations.insert(termination).await?;
    info!(
        correlation_id = %correlation_id,
        termination_id = %termination.id(),
        employee_id = %termination.employee_id,
        "Termination requested"
    );
    created(termination)
}

/// GET /api/terminations/{id}
pub(super) async fn get_termination(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Termination> {
    ok(state.db().terminations.find_by_id(&id).await?)
}

/// POST /api/terminations/{id}/approve
///
/// Approving an already approved termination succeeds and keeps the first
/// approval's `approvedAt`; repeated approvals are not recorded.
pub(super) async fn approve_termination(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Bytes, BytesRejection>,
) -> ApiResult<Termination> {
    let correlation_id = Uuid::new_v4();
    let request: ApproveTerminationRequest = parse_optional_body(payload)?;
    let policy = state.policy();
    let termination = state
        .db()
        .terminations
        .update(&id, |termination| {
            if termination.status == TerminationStatus::Approved {
                debug!(termination_id = %id, "Termination already approved");
                return Ok(());
            }
            termination.status = transition(
                Termination::RESOURCE,
                termination.status,
                TerminationStatus::Approved,
                policy,
            )?;
            termination.approved_at = Some(Utc::now());
            termination.approved_by = request.approved_by;
            Ok(())
        })
        .await?;
    info!(
        correlation_id = %correlation_id,
        termination_id = %id,
        employee_id = %termination.employee_id,
        "Termination approved"
    );
    ok(termination)
}

/// GET /api/clearance-checklists
pub(super) async fn list_clearance_checklists(
    State(state): State<AppState>,
) -> ApiResult<Vec<ClearanceChecklist>> {
    list(state.db().clearance_checklists.find_all().await)
}

/// POST /api/clearance-checklists
pub(super) async fn create_clearance_checklist(
    State(state): State<AppState>,
    payload: Result<Json<CreateClearanceChecklistRequest>, JsonRejection>,
) -> ApiResult<ClearanceChecklist> {
    let correlation_id = Uuid::new_v4();
    let checklist = parse_body(payload)?.into_document()?;
    let checklist = state.db().clearance_checklists.insert(checklist).await?;
    info!(
        correlation_id = %correlation_id,
        checklist_id = %checklist.id(),
        termination_id = %checklist.termination_id,
        items = checklist.items.len(),
        "Clearance checklist created"
    );
    created(checklist)
}

/// GET /api/clearance-checklists/{id}
pub(super) async fn get_clearance_checklist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ClearanceChecklist> {
    ok(state.db().clearance_checklists.find_by_id(&id).await?)
}

/// PATCH /api/clearance-checklists/{id}
pub(super) async fn update_clearance_checklist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateClearanceChecklistRequest>, JsonRejection>,
) -> ApiResult<ClearanceChecklist> {
    let correlation_id = Uuid::new_v4();
    let patch = parse_body(payload)?;
    let policy = state.policy();
    let checklist = state
        .db()
        .clearance_checklists
        .update(&id, |checklist| patch.apply(checklist, policy))
        .await?;
    info!(
        correlation_id = %correlation_id,
        checklist_id = %id,
        status = ?checklist.status,
        outstanding = checklist.outstanding().len(),
        "Clearance checklist updated"
    );
    ok(checklist)
}
