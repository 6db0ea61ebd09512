//! Payroll run approval model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflow::{ClosedSet, StatusWorkflow};

use super::document::{Document, DocumentMeta};

/// Decision state of an [`Approval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    /// No decision yet.
    #[default]
    Pending,
    /// Approved by the approver.
    Approved,
    /// Rejected by the approver.
    Rejected,
}

impl ClosedSet for ApprovalStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::Approved, Self::Rejected];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl StatusWorkflow for ApprovalStatus {
    fn successors(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Approved | Self::Rejected => &[],
        }
    }
}

/// Role under which an approver signs off a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApproverRole {
    /// Line manager sign-off.
    Manager,
    /// Finance sign-off.
    Finance,
    /// Payroll specialist sign-off.
    Payroll,
}

impl ClosedSet for ApproverRole {
    const ALL: &'static [Self] = &[Self::Manager, Self::Finance, Self::Payroll];
    const FIELD: &'static str = "approverRole";

    fn as_str(self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Finance => "finance",
            Self::Payroll => "payroll",
        }
    }
}

/// One approver's decision on a payroll run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    /// Identity and timestamps.
    #[serde(flatten)]
    pub meta: DocumentMeta,
    /// The payroll run under review.
    pub run_id: String,
    /// The person deciding.
    pub approver_id: String,
    /// The capacity in which they decide.
    pub approver_role: ApproverRole,
    /// Reason given with the decision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// When the decision was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<DateTime<Utc>>,
    /// Current decision state.
    #[serde(default)]
    pub status: ApprovalStatus,
}

impl Document for Approval {
    const COLLECTION: &'static str = "approvals";
    const RESOURCE: &'static str = "Approval";

    fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut DocumentMeta {
        &mut self.meta
    }
}
