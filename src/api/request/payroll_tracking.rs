//! Request bodies for expense claims and refunds.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ServiceResult;
use crate::models::{Claim, ClaimStatus, Document, DocumentMeta, Refund, RefundStatus};
use crate::workflow::{transition_str, TransitionPolicy};

use super::FieldCheck;

/// Body of `POST /payroll-tracking/claims`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimRequest {
    /// The claimant.
    pub employee_id: Option<String>,
    /// Expense category.
    pub claim_type: Option<String>,
    /// Amount claimed.
    pub amount: Option<Decimal>,
    /// What the expense was for.
    #[serde(default)]
    pub description: Option<String>,
    /// Assigned finance staff member.
    #[serde(default)]
    pub finance_staff_id: Option<String>,
}

impl CreateClaimRequest {
    /// Validates the body and builds a claim under review.
    pub fn into_document(self) -> ServiceResult<Claim> {
        let mut check = FieldCheck::new(Claim::RESOURCE);
        let employee_id = check.text("employeeId", self.employee_id);
        let claim_type = check.text("claimType", self.claim_type);
        let amount = check.required("amount", self.amount);
        let (Some(employee_id), Some(claim_type), Some(amount)) = (employee_id, claim_type, amount)
        else {
            return Err(check.into_error());
        };
        check.positive("amount", amount);
        check.finish()?;

        Ok(Claim {
            meta: DocumentMeta::new(),
            employee_id,
            finance_staff_id: self.finance_staff_id,
            claim_type,
            description: self.description,
            amount,
            resolution_comment: None,
            status: ClaimStatus::UnderReview,
        })
    }
}

/// Body of `PATCH /payroll-tracking/claims/{id}/status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClaimStatusRequest {
    /// New status.
    pub status: Option<String>,
    /// Reviewer's explanation.
    #[serde(default)]
    pub resolution_comment: Option<String>,
    /// Reviewer id.
    #[serde(default)]
    pub finance_staff_id: Option<String>,
}

impl UpdateClaimStatusRequest {
    /// Applies the decision.
    pub fn apply(self, claim: &mut Claim, policy: TransitionPolicy) -> ServiceResult<()> {
        let mut check = FieldCheck::new(Claim::RESOURCE);
        let Some(status) = check.text("status", self.status) else {
            return Err(check.into_error());
        };
        claim.status = transition_str(Claim::RESOURCE, claim.status, &status, policy)?;
        if let Some(comment) = self.resolution_comment {
            claim.resolution_comment = Some(comment);
        }
        if let Some(staff) = self.finance_staff_id {
            claim.finance_staff_id = Some(staff);
        }
        Ok(())
    }
}

/// Body of `POST /payroll-tracking/refunds`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRefundRequest {
    /// Source claim.
    #[serde(default)]
    pub claim_id: Option<String>,
    /// Source dispute.
    #[serde(default)]
    pub dispute_id: Option<String>,
    /// The employee being refunded.
    pub employee_id: Option<String>,
    /// Amount to pay.
    pub amount: Option<Decimal>,
    /// Issuing finance staff member.
    #[serde(default)]
    pub finance_staff_id: Option<String>,
}

impl CreateRefundRequest {
    /// Validates the body and builds a pending refund.
    ///
    /// Exactly one of `claimId` and `disputeId` must be given.
    pub fn into_document(self) -> ServiceResult<Refund> {
        let mut check = FieldCheck::new(Refund::RESOURCE);
        let employee_id = check.text("employeeId", self.employee_id);
        let amount = check.required("amount", self.amount);
        let claim_id = self.claim_id.filter(|v| !v.trim().is_empty());
        let dispute_id = self.dispute_id.filter(|v| !v.trim().is_empty());
        match (&claim_id, &dispute_id) {
            (None, None) => check.fail("claimId or disputeId is required"),
            (Some(_), Some(_)) => check.fail("only one of claimId and disputeId may be set"),
            _ => {}
        }
        let (Some(employee_id), Some(amount)) = (employee_id, amount) else {
            return Err(check.into_error());
        };
        check.positive("amount", amount);
        check.finish()?;

        Ok(Refund {
            meta: DocumentMeta::new(),
            claim_id,
            dispute_id,
            employee_id,
            amount,
            finance_staff_id: self.finance_staff_id,
            paid_at: None,
            status: RefundStatus::Pending,
        })
    }
}

/// Body of `PATCH /payroll-tracking/refunds/{id}/status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRefundStatusRequest {
    /// New status.
    pub status: Option<String>,
}

impl UpdateRefundStatusRequest {
    /// Applies the status change; paying stamps `paidAt` once.
    pub fn apply(self, refund: &mut Refund, policy: TransitionPolicy) -> ServiceResult<()> {
        let mut check = FieldCheck::new(Refund::RESOURCE);
        let Some(status) = check.text("status", self.status) else {
            return Err(check.into_error());
        };
        refund.status = transition_str(Refund::RESOURCE, refund.status, &status, policy)?;
        match refund.status {
            RefundStatus::Paid if refund.paid_at.is_none() => refund.paid_at = Some(Utc::now()),
            RefundStatus::Pending => refund.paid_at = None,
            RefundStatus::Paid => {}
        }
        Ok(())
    }
}
