//! Offboarding clearance checklist model.
//!
//! Each departing employee gets a checklist of per-department sign-offs.
//! The checklist can only be completed once every item is cleared.

use serde::{Deserialize, Serialize};

use crate::workflow::{ClosedSet, StatusWorkflow};

use super::document::{Document, DocumentMeta};

/// Lifecycle state of a [`ClearanceChecklist`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearanceStatus {
    /// Sign-offs outstanding.
    #[default]
    Pending,
    /// Every department has signed off.
    Completed,
}

impl ClosedSet for ClearanceStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::Completed];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl StatusWorkflow for ClearanceStatus {
    fn successors(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Completed],
            Self::Completed => &[],
        }
    }
}

/// One department's sign-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearanceItem {
    /// Department responsible, e.g. "IT" or "Finance".
    pub department: String,
    /// Whether the department has signed off.
    #[serde(default)]
    pub cleared: bool,
    /// Notes from the department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// Sign-offs required before a termination is finalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearanceChecklist {
    /// Identity and timestamps.
    #[serde(flatten)]
    pub meta: DocumentMeta,
    /// The termination this checklist belongs to.
    pub termination_id: String,
    /// The departing employee.
    pub employee_id: String,
    /// Department sign-offs.
    #[serde(default)]
    pub items: Vec<ClearanceItem>,
    /// Company equipment handed back.
    #[serde(default)]
    pub equipment_returned: bool,
    /// Access card handed back.
    #[serde(default)]
    pub access_card_returned: bool,
    /// Current lifecycle state.
    #[serde(default)]
    pub status: ClearanceStatus,
}

impl ClearanceChecklist {
    /// Departments that have not signed off yet.
    pub fn outstanding(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| !item.cleared)
            .map(|item| item.department.as_str())
            .collect()
    }
}

impl Document for ClearanceChecklist {
    const COLLECTION: &'static str = "clearance_checklists";
    const RESOURCE: &'static str = "ClearanceChecklist";

    fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut DocumentMeta {
        &mut self.meta
    }
}
