//! Signing bonus model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::workflow::{ClosedSet, StatusWorkflow};

use super::document::{Document, DocumentMeta};

/// Lifecycle state of a [`SigningBonus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningBonusStatus {
    /// Awaiting review.
    #[default]
    Pending,
    /// Approved for payment.
    Approved,
    /// Declined.
    Rejected,
    /// Included in a payroll run.
    Paid,
}

impl ClosedSet for SigningBonusStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::Approved, Self::Rejected, Self::Paid];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Paid => "paid",
        }
    }
}

impl StatusWorkflow for SigningBonusStatus {
    fn successors(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Approved => &[Self::Paid],
            Self::Rejected | Self::Paid => &[],
        }
    }
}

/// A one-off bonus promised to a new hire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningBonus {
    /// Identity and timestamps.
    #[serde(flatten)]
    pub meta: DocumentMeta,
    /// The new hire.
    pub employee_id: String,
    /// Bonus amount.
    pub amount: Decimal,
    /// Planned payment date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    /// Current lifecycle state.
    #[serde(default)]
    pub status: SigningBonusStatus,
}

impl Document for SigningBonus {
    const COLLECTION: &'static str = "signing_bonuses";
    const RESOURCE: &'static str = "SigningBonus";

    fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut DocumentMeta {
        &mut self.meta
    }
}
