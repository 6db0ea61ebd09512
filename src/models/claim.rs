//! Expense claim model for payroll tracking.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::workflow::{ClosedSet, StatusWorkflow};

use super::document::{Document, DocumentMeta};

/// Review state of a [`Claim`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Waiting for finance staff.
    #[default]
    #[serde(rename = "under review")]
    UnderReview,
    /// Accepted for reimbursement.
    #[serde(rename = "approved")]
    Approved,
    /// Declined.
    #[serde(rename = "rejected")]
    Rejected,
}

impl ClosedSet for ClaimStatus {
    const ALL: &'static [Self] = &[Self::UnderReview, Self::Approved, Self::Rejected];

    fn as_str(self) -> &'static str {
        match self {
            Self::UnderReview => "under review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl StatusWorkflow for ClaimStatus {
    fn successors(self) -> &'static [Self] {
        match self {
            Self::UnderReview => &[Self::Approved, Self::Rejected],
            Self::Approved | Self::Rejected => &[],
        }
    }
}

/// An employee's request for reimbursement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Identity and timestamps.
    #[serde(flatten)]
    pub meta: DocumentMeta,
    /// The claimant.
    pub employee_id: String,
    /// The finance staff member handling the claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finance_staff_id: Option<String>,
    /// Category, e.g. "travel" or "medical".
    pub claim_type: String,
    /// What the expense was for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Amount claimed.
    pub amount: Decimal,
    /// Reviewer's explanation of the decision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_comment: Option<String>,
    /// Current review state.
    #[serde(default)]
    pub status: ClaimStatus,
}

impl Document for Claim {
    const COLLECTION: &'static str = "claims";
    const RESOURCE: &'static str = "Claim";

    fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut DocumentMeta {
        &mut self.meta
    }
}
