//! Integration tests for the HR payroll service.
//!
//! This test suite drives the HTTP router end to end:
//! - Envelope shape for success, list and failure responses
//! - Not-found handling for missing and malformed ids
//! - Required-field validation with nothing persisted
//! - Status workflows, with and without transition enforcement
//! - Termination approval idempotency
//! - Payroll run calculation over payslips
//! - File-backed storage surviving a restart

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use tower::ServiceExt;

use hr_payroll::api::{create_router, AppState};
use hr_payroll::store::Database;
use hr_payroll::workflow::TransitionPolicy;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::new(
        Database::in_memory(),
        TransitionPolicy::GUARDED,
    ))
}

fn create_unguarded_router() -> Router {
    create_router(AppState::new(
        Database::in_memory(),
        TransitionPolicy::UNGUARDED,
    ))
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(body) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, "GET", uri, None).await
}

async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, "POST", uri, Some(body)).await
}

async fn patch(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, "PATCH", uri, Some(body)).await
}

/// Creates a record and returns its id, asserting a 201 envelope.
async fn create(router: &Router, uri: &str, body: Value) -> String {
    let (status, json) = post(router, uri, body).await;
    assert_eq!(status, StatusCode::CREATED, "create {} failed: {}", uri, json);
    assert_eq!(json["success"], true);
    json["data"]["_id"].as_str().unwrap().to_string()
}

/// Sends a JSON-typed request whose body is exactly `body`.
async fn send_raw_json(router: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body_bytes).unwrap())
}

fn offer_body() -> Value {
    json!({"applicationId": "A1", "salary": 50000, "startDate": "2024-01-01"})
}

fn assert_failure(status: StatusCode, json: &Value, expected: StatusCode) {
    assert_eq!(status, expected, "unexpected status, body: {}", json);
    assert_eq!(json["success"], false);
    assert!(json["error"].is_string());
    assert!(json.get("data").is_none());
}

fn decimal(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().unwrap()).unwrap()
}

// =============================================================================
// Envelope & lookups
// =============================================================================

#[tokio::test]
async fn test_create_offer_returns_201_in_draft() {
    let router = create_router_for_test();
    let (status, json) = post(&router, "/api/offers", offer_body()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "Draft");
    assert_eq!(json["data"]["applicationId"], "A1");
    assert_eq!(json["data"]["startDate"], "2024-01-01");
    assert_eq!(decimal(&json["data"]["salary"]), Decimal::new(50000, 0));
    assert_eq!(json["data"]["_id"].as_str().unwrap().len(), 24);
    assert!(json["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn test_missing_interview_returns_404() {
    let router = create_router_for_test();
    let (status, json) = get(&router, "/api/interviews/000000000000000000000000").await;
    assert_failure(status, &json, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_id_returns_404() {
    let router = create_router_for_test();
    let (status, json) = get(&router, "/api/offers/not-an-id").await;
    assert_failure(status, &json, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_includes_count() {
    let router = create_router_for_test();
    create(&router, "/api/offers", offer_body()).await;
    create(&router, "/api/offers", offer_body()).await;

    let (status, json) = get(&router, "/api/offers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_interviews_by_application() {
    let router = create_router_for_test();
    let id = create(
        &router,
        "/api/interviews",
        json!({"applicationId": "A1", "stage": "technical", "panel": ["u1", "u2"]}),
    )
    .await;
    create(&router, "/api/interviews", json!({"applicationId": "A2"})).await;

    let (status, json) = get(&router, "/api/interviews/application/A1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["_id"], id.as_str());
    assert_eq!(json["data"][0]["status"], "scheduled");

    let (status, json) = get(&router, &format!("/api/interviews/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["panel"], json!(["u1", "u2"]));
}

#[tokio::test]
async fn test_interview_status_is_free_form() {
    let router = create_router_for_test();
    let id = create(&router, "/api/interviews", json!({"applicationId": "A1"})).await;
    let (status, json) = patch(
        &router,
        &format!("/api/interviews/{}", id),
        json!({"status": "no-show", "feedback": "candidate did not join"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "no-show");
}

#[tokio::test]
async fn test_bad_query_string_is_500_envelope() {
    let router = create_router_for_test();
    for uri in [
        "/payroll-execution/payslips?runId=a&runId=b",
        "/payroll-execution/irregularities?runId=a&runId=b",
    ] {
        let (status, json) = get(&router, uri).await;
        assert_failure(status, &json, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            json["error"].as_str().unwrap().contains("Malformed query string"),
            "{}",
            json
        );
    }
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_offer_missing_required_fields_persists_nothing() {
    let router = create_router_for_test();
    for missing in ["salary", "startDate", "applicationId"] {
        let mut body = offer_body();
        body.as_object_mut().unwrap().remove(missing);
        let (status, json) = post(&router, "/api/offers", body).await;
        assert_failure(status, &json, StatusCode::INTERNAL_SERVER_ERROR);
        let error = json["error"].as_str().unwrap();
        assert!(error.contains("validation failed"), "{}", error);
        assert!(error.contains(missing), "{}", error);
    }

    let (_, json) = get(&router, "/api/offers").await;
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_refund_requires_single_source() {
    let router = create_router_for_test();
    let (status, json) = post(
        &router,
        "/payroll-tracking/refunds",
        json!({"employeeId": "e1", "amount": "10.00"}),
    )
    .await;
    assert_failure(status, &json, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap().contains("claimId or disputeId"));
}

#[tokio::test]
async fn test_unknown_approver_role_rejected() {
    let router = create_router_for_test();
    let (status, json) = post(
        &router,
        "/payroll-execution/approvals",
        json!({"runId": "r1", "approverId": "u1", "approverRole": "ceo"}),
    )
    .await;
    assert_failure(status, &json, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap().contains("approverRole"));
}

// =============================================================================
// Status workflows
// =============================================================================

#[tokio::test]
async fn test_out_of_enum_status_rejected_everywhere() {
    let router = create_router_for_test();

    let offer = create(&router, "/api/offers", offer_body()).await;
    let contract = create(
        &router,
        "/api/contracts",
        json!({"applicationId": "A1", "offerId": offer, "salary": 50000, "startDate": "2024-01-01"}),
    )
    .await;
    let checklist = create(
        &router,
        "/api/clearance-checklists",
        json!({"terminationId": "t1", "employeeId": "e1"}),
    )
    .await;
    let claim = create(
        &router,
        "/payroll-tracking/claims",
        json!({"employeeId": "e1", "claimType": "travel", "amount": 120}),
    )
    .await;
    let refund = create(
        &router,
        "/payroll-tracking/refunds",
        json!({"employeeId": "e1", "claimId": claim, "amount": 120}),
    )
    .await;
    let run = create(
        &router,
        "/payroll-execution/runs",
        json!({"period": "2025-07", "entity": "ACME"}),
    )
    .await;
    let bonus = create(
        &router,
        "/payroll-execution/signing-bonuses",
        json!({"employeeId": "e1", "amount": 2000}),
    )
    .await;
    let payslip = create(
        &router,
        "/payroll-execution/payslips",
        json!({"runId": run, "employeeId": "e1", "grossPay": 5000, "deductions": 1000}),
    )
    .await;

    let targets = [
        (format!("/api/offers/{}", offer), format!("/api/offers/{}", offer), "Draft"),
        (format!("/api/contracts/{}", contract), format!("/api/contracts/{}", contract), "Active"),
        (
            format!("/api/clearance-checklists/{}", checklist),
            format!("/api/clearance-checklists/{}", checklist),
            "pending",
        ),
        (
            format!("/payroll-tracking/claims/{}/status", claim),
            format!("/payroll-tracking/claims/{}", claim),
            "under review",
        ),
        (
            format!("/payroll-tracking/refunds/{}/status", refund),
            format!("/payroll-tracking/refunds/{}", refund),
            "pending",
        ),
        (
            format!("/payroll-execution/runs/{}/status", run),
            format!("/payroll-execution/runs/{}", run),
            "DRAFT",
        ),
        (
            format!("/payroll-execution/signing-bonuses/{}/status", bonus),
            format!("/payroll-execution/signing-bonuses/{}", bonus),
            "pending",
        ),
        (
            format!("/payroll-execution/payslips/{}/status", payslip),
            format!("/payroll-execution/payslips/{}", payslip),
            "pending",
        ),
    ];

    for (update_uri, get_uri, original) in targets {
        let (status, json) = patch(&router, &update_uri, json!({"status": "BOGUS"})).await;
        assert_failure(status, &json, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            json["error"].as_str().unwrap().contains("`BOGUS` is not a valid status"),
            "{}: {}",
            update_uri,
            json
        );

        let (_, json) = get(&router, &get_uri).await;
        assert_eq!(json["data"]["status"], original, "{} changed", get_uri);
    }
}

#[tokio::test]
async fn test_offer_workflow() {
    let router = create_router_for_test();
    let id = create(&router, "/api/offers", offer_body()).await;
    let uri = format!("/api/offers/{}", id);

    let (status, json) = patch(&router, &uri, json!({"status": "Accepted"})).await;
    assert_failure(status, &json, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Offer cannot move from Draft to Accepted");

    let (status, json) = patch(&router, &uri, json!({"status": "Sent"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "Sent");

    let (status, json) = patch(&router, &uri, json!({"status": "Accepted"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "Accepted");

    let (status, json) = patch(&router, &uri, json!({"status": "Draft"})).await;
    assert_failure(status, &json, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_unguarded_policy_is_last_write_wins() {
    let router = create_unguarded_router();
    let id = create(&router, "/api/offers", offer_body()).await;
    let uri = format!("/api/offers/{}", id);

    let (status, json) = patch(&router, &uri, json!({"status": "Accepted"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "Accepted");

    let (status, json) = patch(&router, &uri, json!({"status": "Draft"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "Draft");

    let (status, json) = patch(&router, &uri, json!({"status": "Withdrawn"})).await;
    assert_failure(status, &json, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_payroll_run_approval_chain() {
    let router = create_router_for_test();
    let id = create(
        &router,
        "/payroll-execution/runs",
        json!({"period": "2025-07", "entity": "ACME"}),
    )
    .await;
    let uri = format!("/payroll-execution/runs/{}/status", id);

    let (status, _) = patch(&router, &uri, json!({"status": "LOCKED"})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    for next in ["PREVIEWED", "LOCKED", "APPROVED_BY_MANAGER", "APPROVED_BY_FINANCE"] {
        let (status, json) = patch(&router, &uri, json!({"status": next})).await;
        assert_eq!(status, StatusCode::OK, "{}: {}", next, json);
        assert_eq!(json["data"]["status"], next);
    }

    let (status, json) = patch(
        &router,
        &uri,
        json!({"status": "REJECTED", "rejectionReason": "too late"}),
    )
    .await;
    assert_failure(status, &json, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_payroll_run_rejection_from_locked() {
    let router = create_router_for_test();
    let id = create(
        &router,
        "/payroll-execution/runs",
        json!({"period": "2025-08", "entity": "ACME"}),
    )
    .await;
    let uri = format!("/payroll-execution/runs/{}/status", id);
    patch(&router, &uri, json!({"status": "PREVIEWED"})).await;
    patch(&router, &uri, json!({"status": "LOCKED"})).await;

    let (status, json) = patch(
        &router,
        &uri,
        json!({"status": "REJECTED", "rejectionReason": "missing overtime"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "REJECTED");
    assert_eq!(json["data"]["rejectionReason"], "missing overtime");
}

#[tokio::test]
async fn test_termination_approve_is_idempotent() {
    let router = create_router_for_test();
    let id = create(
        &router,
        "/api/terminations",
        json!({"employeeId": "e1", "reason": "resignation"}),
    )
    .await;
    let uri = format!("/api/terminations/{}/approve", id);

    let (status, first) = post(&router, &uri, json!({"approvedBy": "hr_1"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["data"]["status"], "Approved");
    assert_eq!(first["data"]["approvedBy"], "hr_1");

    let (status, second) = send(&router, "POST", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["data"]["status"], "Approved");
    assert_eq!(second["data"]["approvedAt"], first["data"]["approvedAt"]);
    assert_eq!(second["data"]["approvedBy"], "hr_1");
}

#[tokio::test]
async fn test_approve_missing_termination_returns_404() {
    let router = create_router_for_test();
    let (status, json) = send(
        &router,
        "POST",
        "/api/terminations/000000000000000000000000/approve",
        None,
    )
    .await;
    assert_failure(status, &json, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_claim_review_and_refund_payment() {
    let router = create_router_for_test();
    let claim = create(
        &router,
        "/payroll-tracking/claims",
        json!({"employeeId": "e1", "claimType": "medical", "amount": "310.40"}),
    )
    .await;

    let (status, json) = patch(
        &router,
        &format!("/payroll-tracking/claims/{}/status", claim),
        json!({"status": "approved", "financeStaffId": "f1", "resolutionComment": "receipts ok"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "approved");
    assert_eq!(json["data"]["financeStaffId"], "f1");

    let refund = create(
        &router,
        "/payroll-tracking/refunds",
        json!({"employeeId": "e1", "claimId": claim, "amount": "310.40"}),
    )
    .await;
    let (status, json) = patch(
        &router,
        &format!("/payroll-tracking/refunds/{}/status", refund),
        json!({"status": "paid"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "paid");
    assert!(json["data"]["paidAt"].is_string());
}

#[tokio::test]
async fn test_signing_bonus_must_be_approved_before_paid() {
    let router = create_router_for_test();
    let id = create(
        &router,
        "/payroll-execution/signing-bonuses",
        json!({"employeeId": "e1", "amount": 5000, "paymentDate": "2025-08-01"}),
    )
    .await;
    let uri = format!("/payroll-execution/signing-bonuses/{}/status", id);

    let (status, _) = patch(&router, &uri, json!({"status": "paid"})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = patch(&router, &uri, json!({"status": "approved"})).await;
    assert_eq!(status, StatusCode::OK);
    let (status, json) = patch(&router, &uri, json!({"status": "paid"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "paid");
}

#[tokio::test]
async fn test_approvals_by_run_and_decisions() {
    let router = create_router_for_test();
    let manager = create(
        &router,
        "/payroll-execution/approvals",
        json!({"runId": "r1", "approverId": "m1", "approverRole": "manager"}),
    )
    .await;
    let finance = create(
        &router,
        "/payroll-execution/approvals",
        json!({"runId": "r1", "approverId": "f1", "approverRole": "finance"}),
    )
    .await;
    create(
        &router,
        "/payroll-execution/approvals",
        json!({"runId": "r2", "approverId": "m1", "approverRole": "manager"}),
    )
    .await;

    let (_, json) = get(&router, "/payroll-execution/approvals/run/r1").await;
    assert_eq!(json["count"], 2);

    let (status, json) = post(
        &router,
        &format!("/payroll-execution/approvals/{}/approve", manager),
        json!({"comment": "looks right"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "approved");
    assert_eq!(json["data"]["comment"], "looks right");

    let (status, json) = post(
        &router,
        &format!("/payroll-execution/approvals/{}/reject", finance),
        json!({"comment": "budget exceeded"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "rejected");

    let (status, _) = post(
        &router,
        &format!("/payroll-execution/approvals/{}/approve", finance),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_clearance_checklist_completion() {
    let router = create_router_for_test();
    let id = create(
        &router,
        "/api/clearance-checklists",
        json!({
            "terminationId": "t1",
            "employeeId": "e1",
            "items": [{"department": "IT"}, {"department": "Finance"}]
        }),
    )
    .await;
    let uri = format!("/api/clearance-checklists/{}", id);

    let (status, json) = patch(&router, &uri, json!({"status": "completed"})).await;
    assert_failure(status, &json, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap().contains("IT, Finance"));

    let (status, json) = patch(
        &router,
        &uri,
        json!({
            "items": [
                {"department": "IT", "cleared": true},
                {"department": "Finance", "cleared": true}
            ],
            "equipmentReturned": true,
            "accessCardReturned": true,
            "status": "completed"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "completed");
}

#[tokio::test]
async fn test_approve_with_json_header_and_empty_body() {
    let router = create_router_for_test();
    let termination = create(
        &router,
        "/api/terminations",
        json!({"employeeId": "e1", "reason": "resignation"}),
    )
    .await;
    let (status, json) = send_raw_json(
        &router,
        "POST",
        &format!("/api/terminations/{}/approve", termination),
        "",
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", json);
    assert_eq!(json["data"]["status"], "Approved");

    let approval = create(
        &router,
        "/payroll-execution/approvals",
        json!({"runId": "r1", "approverId": "m1", "approverRole": "manager"}),
    )
    .await;
    let (status, json) = send_raw_json(
        &router,
        "POST",
        &format!("/payroll-execution/approvals/{}/reject", approval),
        "  ",
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", json);
    assert_eq!(json["data"]["status"], "rejected");

    let (status, json) = send_raw_json(
        &router,
        "POST",
        &format!("/api/terminations/{}/approve", termination),
        "{broken",
    )
    .await;
    assert_failure(status, &json, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_reopened_run_loses_rejection_reason() {
    let router = create_unguarded_router();
    let id = create(
        &router,
        "/payroll-execution/runs",
        json!({"period": "2025-09", "entity": "ACME"}),
    )
    .await;
    let uri = format!("/payroll-execution/runs/{}/status", id);

    let (status, json) = patch(
        &router,
        &uri,
        json!({"status": "REJECTED", "rejectionReason": "wrong rates"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["rejectionReason"], "wrong rates");

    let (status, json) = patch(&router, &uri, json!({"status": "DRAFT"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "DRAFT");
    assert!(json["data"]["rejectionReason"].is_null(), "{}", json);
}

// =============================================================================
// Payroll execution
// =============================================================================

#[tokio::test]
async fn test_run_calculation_sums_payslips() {
    let router = create_router_for_test();
    let run = create(
        &router,
        "/payroll-execution/runs",
        json!({"period": "2025-07", "entity": "ACME"}),
    )
    .await;
    create(
        &router,
        "/payroll-execution/payslips",
        json!({"runId": run, "employeeId": "e1", "grossPay": "4200.50", "deductions": "900.25"}),
    )
    .await;
    create(
        &router,
        "/payroll-execution/payslips",
        json!({"runId": run, "employeeId": "e2", "grossPay": "3100.00"}),
    )
    .await;
    create(
        &router,
        "/payroll-execution/payslips",
        json!({"runId": "other", "employeeId": "e3", "grossPay": "999.99"}),
    )
    .await;

    let (status, json) = get(&router, &format!("/payroll-execution/runs/{}/calculation", run)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["runId"], run.as_str());
    assert_eq!(json["data"]["payslipCount"], 2);
    assert_eq!(decimal(&json["data"]["totalGross"]), Decimal::from_str("7300.50").unwrap());
    assert_eq!(decimal(&json["data"]["totalDeductions"]), Decimal::from_str("900.25").unwrap());
    assert_eq!(decimal(&json["data"]["totalNet"]), Decimal::from_str("6400.25").unwrap());

    let (_, json) = get(&router, &format!("/payroll-execution/payslips?runId={}", run)).await;
    assert_eq!(json["count"], 2);
}

#[tokio::test]
async fn test_calculation_for_missing_run_returns_404() {
    let router = create_router_for_test();
    let (status, json) = get(
        &router,
        "/payroll-execution/runs/000000000000000000000000/calculation",
    )
    .await;
    assert_failure(status, &json, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_irregularity_flag_and_resolve() {
    let router = create_router_for_test();
    let id = create(
        &router,
        "/payroll-execution/irregularities",
        json!({"runId": "r1", "employeeId": "e1", "description": "net pay doubled", "severity": "high"}),
    )
    .await;

    let (_, json) = get(&router, "/payroll-execution/irregularities?runId=r1").await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["severity"], "high");
    assert_eq!(json["data"][0]["status"], "open");

    let (status, json) = patch(
        &router,
        &format!("/payroll-execution/irregularities/{}/resolve", id),
        json!({"resolution": "retro pay for July"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "resolved");
    assert_eq!(json["data"]["resolution"], "retro pay for July");
}

// =============================================================================
// Storage
// =============================================================================

#[tokio::test]
async fn test_file_backed_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let id = {
        let db = Database::open_dir(dir.path()).await.unwrap();
        let router = create_router(AppState::new(db, TransitionPolicy::GUARDED));
        let id = create(&router, "/api/offers", offer_body()).await;
        let (status, _) = patch(&router, &format!("/api/offers/{}", id), json!({"status": "Sent"})).await;
        assert_eq!(status, StatusCode::OK);
        id
    };

    let db = Database::open_dir(dir.path()).await.unwrap();
    let router = create_router(AppState::new(db, TransitionPolicy::GUARDED));
    let (status, json) = get(&router, &format!("/api/offers/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "Sent");

    let (_, json) = get(&router, "/api/test-db").await;
    assert_eq!(json["data"]["backend"], "file");
}
