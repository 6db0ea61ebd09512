//! Employment contract model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::workflow::{ClosedSet, StatusWorkflow};

use super::document::{Document, DocumentMeta};

/// Lifecycle state of a [`Contract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContractStatus {
    /// In force.
    #[default]
    Active,
    /// Ended by a termination.
    Terminated,
}

impl ClosedSet for ContractStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Terminated];

    fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Terminated => "Terminated",
        }
    }
}

impl StatusWorkflow for ContractStatus {
    fn successors(self) -> &'static [Self] {
        match self {
            Self::Active => &[Self::Terminated],
            Self::Terminated => &[],
        }
    }
}

/// A signed employment contract derived from an accepted offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// Identity and timestamps.
    #[serde(flatten)]
    pub meta: DocumentMeta,
    /// The originating application.
    pub application_id: String,
    /// The accepted offer.
    pub offer_id: String,
    /// Contracted annual salary.
    pub salary: Decimal,
    /// First day of employment.
    pub start_date: NaiveDate,
    /// Last day of employment for fixed-term contracts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// When both parties signed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_at: Option<DateTime<Utc>>,
    /// Current lifecycle state.
    #[serde(default)]
    pub status: ContractStatus,
}

impl Document for Contract {
    const COLLECTION: &'static str = "contracts";
    const RESOURCE: &'static str = "Contract";

    fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut DocumentMeta {
        &mut self.meta
    }
}
