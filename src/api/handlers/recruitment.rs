//! Handlers for `/api/interviews`, `/api/offers` and `/api/contracts`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::models::{Contract, Document, Interview, Offer};

use super::super::request::{
    parse_body, CreateContractRequest, CreateInterviewRequest, CreateOfferRequest,
    UpdateContractRequest, UpdateInterviewRequest, UpdateOfferRequest,
};
use super::super::response::{created, list, ok, ApiResult};
use super::super::state::AppState;

/// GET /api/interviews
pub(super) async fn list_interviews(State(state): State<AppState>) -> ApiResult<Vec<Interview>> {
    list(state.db().interviews.find_all().await)
}

/// POST /api/interviews
pub(super) async fn create_interview(
    State(state): State<AppState>,
    payload: Result<Json<CreateInterviewRequest>, JsonRejection>,
) -> ApiResult<Interview> {
    let correlation_id = Uuid::new_v4();
    let interview = parse_body(payload)?.into_document()?;
    let interview = state.db().interviews.insert(interview).await?;
    info!(
        correlation_id = %correlation_id,
        interview_id = %interview.id(),
        application_id = %interview.application_id,
        "Interview scheduled"
    );
    created(interview)
}

/// GET /api/interviews/{id}
pub(super) async fn get_interview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Interview> {
    ok(state.db().interviews.find_by_id(&id).await?)
}

/// PATCH /api/interviews/{id}
pub(super) async fn update_interview(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateInterviewRequest>, JsonRejection>,
) -> ApiResult<Interview> {
    let correlation_id = Uuid::new_v4();
    let patch = parse_body(payload)?;
    let interview = state
        .db()
        .interviews
        .update(&id, |interview| patch.apply(interview))
        .await?;
    info!(
        correlation_id = %correlation_id,
        interview_id = %id,
        status = %interview.status,
        "Interview updated"
    );
    ok(interview)
}

/// GET /api/interviews/application/{applicationId}
pub(super) async fn list_interviews_for_application(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
) -> ApiResult<Vec<Interview>> {
    list(
        state
            .db()
            .interviews
            .find_many(|interview| interview.application_id == application_id)
            .await,
    )
}

/// GET /api/offers
pub(super) async fn list_offers(State(state): State<AppState>) -> ApiResult<Vec<Offer>> {
    list(state.db().offers.find_all().await)
}

/// POST /api/offers
///
/// New offers always start in `Draft`.
pub(super) async fn create_offer(
    State(state): State<AppState>,
    payload: Result<Json<CreateOfferRequest>, JsonRejection>,
) -> ApiResult<Offer> {
    let correlation_id = Uuid::new_v4();
    let offer = parse_body(payload)?.into_document()?;
    let offer = state.db().offers.insert(offer).await?;
    info!(
        correlation_id = %correlation_id,
        offer_id = %offer.id(),
        application_id = %offer.application_id,
        salary = %offer.salary,
        "Offer created"
    );
    created(offer)
}

/// GET /api/offers/{id}
pub(super) async fn get_offer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Offer> {
    ok(state.db().offers.find_by_id(&id).await?)
}

/// PATCH /api/offers/{id}
pub(super) async fn update_offer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateOfferRequest>, JsonRejection>,
) -> ApiResult<Offer> {
    let correlation_id = Uuid::new_v4();
    let patch = parse_body(payload)?;
    let policy = state.policy();
    let offer = state
        .db()
        .offers
        .update(&id, |offer| patch.apply(offer, policy))
        .await?;
    info!(
        correlation_id = %correlation_id,
        offer_id = %id,
        status = ?offer.status,
        "Offer updated"
    );
    ok(offer)
}

/// GET /api/offers/application/{applicationId}
pub(super) async fn list_offers_for_application(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
) -> ApiResult<Vec<Offer>> {
    list(
        state
            .db()
            .offers
            .find_many(|offer| offer.application_id == application_id)
            .await,
    )
}

/// GET /api/contracts
pub(super) async fn list_contracts(State(state): State<AppState>) -> ApiResult<Vec<Contract>> {
    list(state.db().contracts.find_all().await)
}

/// POST /api/contracts
pub(super) async fn create_contract(
    State(state): State<AppState>,
    payload: Result<Json<CreateContractRequest>, JsonRejection>,
) -> ApiResult<Contract> {
    let correlation_id = Uuid::new_v4();
    let contract = parse_body(payload)?.into_document()?;
    let contract = state.db().contracts.insert(contract).await?;
    info!(
        correlation_id = %correlation_id,
        contract_id = %contract.id(),
        offer_id = %contract.offer_id,
        "Contract created"
    );
    created(contract)
}

/// GET /api/contracts/{id}
pub(super) async fn get_contract(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Contract> {
    ok(state.db().contracts.find_by_id(&id).await?)
}

/// PATCH /api/contracts/{id}
pub(super) async fn update_contract(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateContractRequest>, JsonRejection>,
) -> ApiResult<Contract> {
    let correlation_id = Uuid::new_v4();
    let patch = parse_body(payload)?;
    let policy = state.policy();
    let contract = state
        .db()
        .contracts
        .update(&id, |contract| patch.apply(contract, policy))
        .await?;
    info!(
        correlation_id = %correlation_id,
        contract_id = %id,
        status = ?contract.status,
        "Contract updated"
    );
    ok(contract)
}
