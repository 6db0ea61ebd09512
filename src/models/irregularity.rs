//! Payroll irregularity model.
//!
//! Irregularities are anomalies flagged while reviewing a run, such as a
//! sudden salary spike or a missing bank account.

use serde::{Deserialize, Serialize};

use crate::workflow::{ClosedSet, StatusWorkflow};

use super::document::{Document, DocumentMeta};

/// Resolution state of an [`Irregularity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IrregularityStatus {
    /// Needs attention.
    #[default]
    Open,
    /// Investigated and closed.
    Resolved,
}

impl ClosedSet for IrregularityStatus {
    const ALL: &'static [Self] = &[Self::Open, Self::Resolved];

    fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Resolved => "resolved",
        }
    }
}

impl StatusWorkflow for IrregularityStatus {
    fn successors(self) -> &'static [Self] {
        match self {
            Self::Open => &[Self::Resolved],
            Self::Resolved => &[],
        }
    }
}

/// How urgent an [`Irregularity`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational.
    Low,
    /// Should be checked before approval.
    #[default]
    Medium,
    /// Blocks approval until resolved.
    High,
}

impl ClosedSet for Severity {
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High];
    const FIELD: &'static str = "severity";

    fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// An anomaly flagged on an employee's pay within a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Irregularity {
    /// Identity and timestamps.
    #[serde(flatten)]
    pub meta: DocumentMeta,
    /// The run being reviewed.
    pub run_id: String,
    /// The affected employee.
    pub employee_id: String,
    /// What looks wrong.
    pub description: String,
    /// How urgent it is.
    #[serde(default)]
    pub severity: Severity,
    /// How it was resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    /// Current resolution state.
    #[serde(default)]
    pub status: IrregularityStatus,
}

impl Document for Irregularity {
    const COLLECTION: &'static str = "irregularities";
    const RESOURCE: &'static str = "Irregularity";

    fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut DocumentMeta {
        &mut self.meta
    }
}
