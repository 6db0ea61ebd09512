//! Refund model.
//!
//! A refund pays back money owed to an employee, either for an approved
//! claim or for a settled payroll dispute.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::workflow::{ClosedSet, StatusWorkflow};

use super::document::{Document, DocumentMeta};

/// Payment state of a [`Refund`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefundStatus {
    /// Scheduled for the next payroll.
    #[default]
    Pending,
    /// Paid out.
    Paid,
}

impl ClosedSet for RefundStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::Paid];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

impl StatusWorkflow for RefundStatus {
    fn successors(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Paid],
            Self::Paid => &[],
        }
    }
}

/// Money owed back to an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    /// Identity and timestamps.
    #[serde(flatten)]
    pub meta: DocumentMeta,
    /// Source claim, when refunding a claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_id: Option<String>,
    /// Source dispute, when refunding a dispute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispute_id: Option<String>,
    /// The employee being refunded.
    pub employee_id: String,
    /// Amount to pay.
    pub amount: Decimal,
    /// Finance staff member who issued the refund.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finance_staff_id: Option<String>,
    /// When the refund was paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    /// Current payment state.
    #[serde(default)]
    pub status: RefundStatus,
}

impl Document for Refund {
    const COLLECTION: &'static str = "refunds";
    const RESOURCE: &'static str = "Refund";

    fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut DocumentMeta {
        &mut self.meta
    }
}
