//! Handlers for the `/payroll-execution` endpoints: runs, approvals,
//! signing bonuses, payslips and irregularities.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{
    Approval, ApprovalStatus, Document, Irregularity, PayrollRun, Payslip, RunTotals, SigningBonus,
};

use super::super::request::{
    parse_body, parse_optional_body, parse_query, ApprovalDecisionRequest, CreateApprovalRequest,
    CreateIrregularityRequest, CreatePayrollRunRequest, CreatePayslipRequest,
    CreateSigningBonusRequest, ResolveIrregularityRequest, RunFilter,
    UpdatePayrollRunStatusRequest, UpdateStatusRequest,
};
use super::super::response::{created, list, ok, ApiResult};
use super::super::state::AppState;

/// GET /payroll-execution/runs
pub(super) async fn list_runs(State(state): State<AppState>) -> ApiResult<Vec<PayrollRun>> {
    list(state.db().payroll_runs.find_all().await)
}

/// POST /payroll-execution/runs
pub(super) async fn create_run(
    State(state): State<AppState>,
    payload: Result<Json<CreatePayrollRunRequest>, JsonRejection>,
) -> ApiResult<PayrollRun> {
    let correlation_id = Uuid::new_v4();
    let run = parse_body(payload)?.into_document()?;
    let run = state.db().payroll_runs.insert(run).await?;
    info!(
        correlation_id = %correlation_id,
        run_id = %run.id(),
        period = %run.period,
        entity = %run.entity,
        "Payroll run created"
    );
    created(run)
}

/// GET /payroll-execution/runs/{id}
pub(super) async fn get_run(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<PayrollRun> {
    ok(state.db().payroll_runs.find_by_id(&id).await?)
}

/// PATCH /payroll-execution/runs/{id}/status
pub(super) async fn update_run_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePayrollRunStatusRequest>, JsonRejection>,
) -> ApiResult<PayrollRun> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(payload)?;
    let policy = state.policy();
    let run = state
        .db()
        .payroll_runs
        .update(&id, |run| request.apply(run, policy))
        .await?;
    info!(
        correlation_id = %correlation_id,
        run_id = %id,
        status = ?run.status,
        "Payroll run status changed"
    );
    ok(run)
}

/// GET /payroll-execution/runs/{id}/calculation
///
/// Sums the payslips attached to the run.
pub(super) async fn run_calculation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<RunTotals> {
    let run = state.db().payroll_runs.find_by_id(&id).await?;
    let run_id = run.id().as_str();
    let payslips = state
        .db()
        .payslips
        .find_many(|payslip| payslip.run_id == run_id)
        .await;
    ok(RunTotals::from_payslips(run_id, &payslips))
}

/// GET /payroll-execution/approvals
pub(super) async fn list_approvals(State(state): State<AppState>) -> ApiResult<Vec<Approval>> {
    list(state.db().approvals.find_all().await)
}

/// POST /payroll-execution/approvals
pub(super) async fn create_approval(
    State(state): State<AppState>,
    payload: Result<Json<CreateApprovalRequest>, JsonRejection>,
) -> ApiResult<Approval> {
    let correlation_id = Uuid::new_v4();
    let approval = parse_body(payload)?.into_document()?;
    let approval = state.db().approvals.insert(approval).await?;
    info!(
        correlation_id = %correlation_id,
        approval_id = %approval.id(),
        run_id = %approval.run_id,
        role = ?approval.approver_role,
        "Approval requested"
    );
    created(approval)
}

/// GET /payroll-execution/approvals/{id}
pub(super) async fn get_approval(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Approval> {
    ok(state.db().approvals.find_by_id(&id).await?)
}

/// GET /payroll-execution/approvals/run/{runId}
pub(super) async fn list_approvals_for_run(
    State(state): State<AppState>,
    Path(run_id): Path<String>,
) -> ApiResult<Vec<Approval>> {
    list(
        state
            .db()
            .approvals
            .find_many(|approval| approval.run_id == run_id)
            .await,
    )
}

/// POST /payroll-execution/approvals/{id}/approve
pub(super) async fn approve_approval(
    state: State<AppState>,
    id: Path<String>,
    payload: Result<Bytes, BytesRejection>,
) -> ApiResult<Approval> {
    decide(state, id, payload, ApprovalStatus::Approved).await
}

/// POST /payroll-execution/approvals/{id}/reject
pub(super) async fn reject_approval(
    state: State<AppState>,
    id: Path<String>,
    payload: Result<Bytes, BytesRejection>,
) -> ApiResult<Approval> {
    decide(state, id, payload, ApprovalStatus::Rejected).await
}

async fn decide(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Bytes, BytesRejection>,
    decision: ApprovalStatus,
) -> ApiResult<Approval> {
    let correlation_id = Uuid::new_v4();
    let request: ApprovalDecisionRequest = parse_optional_body(payload)?;
    let policy = state.policy();
    let approval = state
        .db()
        .approvals
        .update(&id, |approval| request.decide(approval, decision, policy))
        .await?;
    info!(
        correlation_id = %correlation_id,
        approval_id = %id,
        run_id = %approval.run_id,
        decision = ?decision,
        "Approval decided"
    );
    ok(approval)
}

/// GET /payroll-execution/signing-bonuses
pub(super) async fn list_signing_bonuses(
    State(state): State<AppState>,
) -> ApiResult<Vec<SigningBonus>> {
    list(state.db().signing_bonuses.find_all().await)
}

/// POST /payroll-execution/signing-bonuses
pub(super) async fn create_signing_bonus(
    State(state): State<AppState>,
    payload: Result<Json<CreateSigningBonusRequest>, JsonRejection>,
) -> ApiResult<SigningBonus> {
    let correlation_id = Uuid::new_v4();
    let bonus = parse_body(payload)?.into_document()?;
    let bonus = state.db().signing_bonuses.insert(bonus).await?;
    info!(
        correlation_id = %correlation_id,
        bonus_id = %bonus.id(),
        employee_id = %bonus.employee_id,
        amount = %bonus.amount,
        "Signing bonus created"
    );
    created(bonus)
}

/// GET /payroll-execution/signing-bonuses/{id}
pub(super) async fn get_signing_bonus(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<SigningBonus> {
    ok(state.db().signing_bonuses.find_by_id(&id).await?)
}

/// PATCH /payroll-execution/signing-bonuses/{id}/status
pub(super) async fn update_signing_bonus_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> ApiResult<SigningBonus> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(payload)?;
    let policy = state.policy();
    let bonus = state
        .db()
        .signing_bonuses
        .update(&id, |bonus| {
            bonus.status = request.next_status(SigningBonus::RESOURCE, bonus.status, policy)?;
            Ok(())
        })
        .await?;
    info!(
        correlation_id = %correlation_id,
        bonus_id = %id,
        status = ?bonus.status,
        "Signing bonus status changed"
    );
    ok(bonus)
}

/// GET /payroll-execution/payslips?runId=
pub(super) async fn list_payslips(
    State(state): State<AppState>,
    query: Result<Query<RunFilter>, QueryRejection>,
) -> ApiResult<Vec<Payslip>> {
    let filter = parse_query(query)?;
    list(
        state
            .db()
            .payslips
            .find_many(|payslip| filter.matches(&payslip.run_id))
            .await,
    )
}

/// POST /payroll-execution/payslips
pub(super) async fn create_payslip(
    State(state): State<AppState>,
    payload: Result<Json<CreatePayslipRequest>, JsonRejection>,
) -> ApiResult<Payslip> {
    let correlation_id = Uuid::new_v4();
    let payslip = parse_body(payload)?.into_document()?;
    let payslip = state.db().payslips.insert(payslip).await?;
    info!(
        correlation_id = %correlation_id,
        payslip_id = %payslip.id(),
        run_id = %payslip.run_id,
        net_pay = %payslip.net_pay,
        "Payslip created"
    );
    created(payslip)
}

/// GET /payroll-execution/payslips/{id}
pub(super) async fn get_payslip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Payslip> {
    ok(state.db().payslips.find_by_id(&id).await?)
}

/// PATCH /payroll-execution/payslips/{id}/status
pub(super) async fn update_payslip_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> ApiResult<Payslip> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(payload)?;
    let policy = state.policy();
    let payslip = state
        .db()
        .payslips
        .update(&id, |payslip| {
            payslip.status = request.next_status(Payslip::RESOURCE, payslip.status, policy)?;
            Ok(())
        })
        .await?;
    info!(
        correlation_id = %correlation_id,
        payslip_id = %id,
        status = ?payslip.status,
        "Payslip status changed"
    );
    ok(payslip)
}

/// GET /payroll-execution/irregularities?runId=
pub(super) async fn list_irregularities(
    State(state): State<AppState>,
    query: Result<Query<RunFilter>, QueryRejection>,
) -> ApiResult<Vec<Irregularity>> {
    let filter = parse_query(query)?;
    list(
        state
            .db()
            .irregularities
            .find_many(|irregularity| filter.matches(&irregularity.run_id))
            .await,
    )
}

/// POST /payroll-execution/irregularities
pub(super) async fn create_irregularity(
    State(state): State<AppState>,
    payload: Result<Json<CreateIrregularityRequest>, JsonRejection>,
) -> ApiResult<Irregularity> {
    let correlation_id = Uuid::new_v4();
    let irregularity = parse_body(payload)?.into_document()?;
    let irregularity = state.db().irregularities.insert(irregularity).await?;
    warn!(
        correlation_id = %correlation_id,
        irregularity_id = %irregularity.id(),
        run_id = %irregularity.run_id,
        employee_id = %irregularity.employee_id,
        severity = ?irregularity.severity,
        "Payroll irregularity flagged"
    );
    created(irregularity)
}

/// PATCH /payroll-execution/irregularities/{id}/resolve
pub(super) async fn resolve_irregularity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ResolveIrregularityRequest>, JsonRejection>,
) -> ApiResult<Irregularity> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(payload)?;
    let policy = state.policy();
    let irregularity = state
        .db()
        .irregularities
        .update(&id, |irregularity| request.apply(irregularity, policy))
        .await?;
    info!(
        correlation_id = %correlation_id,
        irregularity_id = %id,
        "Payroll irregularity resolved"
    );
    ok(irregularity)
}
