//! Termination model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::workflow::{ClosedSet, StatusWorkflow};

use super::document::{Document, DocumentMeta};

/// Lifecycle state of a [`Termination`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TerminationStatus {
    /// Awaiting HR approval.
    #[default]
    #[serde(rename = "pending")]
    Pending,
    /// Approved.
    Approved,
}

impl ClosedSet for TerminationStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::Approved];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "Approved",
        }
    }
}

impl StatusWorkflow for TerminationStatus {
    fn successors(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Approved],
            Self::Approved => &[],
        }
    }
}

/// A request to end an employee's employment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Termination {
    /// Identity and timestamps.
    #[serde(flatten)]
    pub meta: DocumentMeta,
    /// The employee leaving.
    pub employee_id: String,
    /// Why the employment ends.
    pub reason: String,
    /// Effective last day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<NaiveDate>,
    /// Who approved the termination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    /// When the termination was first approved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    /// Current lifecycle state.
    #[serde(default)]
    pub status: TerminationStatus,
}

impl Document for Termination {
    const COLLECTION: &'static str = "terminations";
    const RESOURCE: &'static str = "Termination";

    fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut DocumentMeta {
        &mut self.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_keeps_mixed_case_wire_values() {
        assert_eq!(
            serde_json::to_string(&TerminationStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&TerminationStatus::Approved).unwrap(),
            "\"Approved\""
        );
    }
}
