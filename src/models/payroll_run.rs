//! Payroll run model.
//!
//! A run moves through preview, lock and two approval stages before it can
//! be executed:
//!
//! ```text
//! DRAFT → PREVIEWED → LOCKED → APPROVED_BY_MANAGER → APPROVED_BY_FINANCE
//!             │          │              │
//!             └──────────┴──────────────┴──→ REJECTED
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::workflow::{ClosedSet, StatusWorkflow};

use super::document::{Document, DocumentMeta};

/// Lifecycle state of a [`PayrollRun`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayrollRunStatus {
    /// Being assembled.
    #[default]
    Draft,
    /// Figures reviewed by payroll staff.
    Previewed,
    /// Frozen; no more payslip changes.
    Locked,
    /// Signed off by the manager.
    ApprovedByManager,
    /// Signed off by finance; ready for execution.
    ApprovedByFinance,
    /// Sent back by a reviewer.
    Rejected,
}

impl ClosedSet for PayrollRunStatus {
    const ALL: &'static [Self] = &[
        Self::Draft,
        Self::Previewed,
        Self::Locked,
        Self::ApprovedByManager,
        Self::ApprovedByFinance,
        Self::Rejected,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Previewed => "PREVIEWED",
            Self::Locked => "LOCKED",
            Self::ApprovedByManager => "APPROVED_BY_MANAGER",
            Self::ApprovedByFinance => "APPROVED_BY_FINANCE",
            Self::Rejected => "REJECTED",
        }
    }
}

impl StatusWorkflow for PayrollRunStatus {
    fn successors(self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::Previewed],
            Self::Previewed => &[Self::Locked, Self::Rejected],
            Self::Locked => &[Self::ApprovedByManager, Self::Rejected],
            Self::ApprovedByManager => &[Self::ApprovedByFinance, Self::Rejected],
            Self::ApprovedByFinance | Self::Rejected => &[],
        }
    }
}

/// One payroll cycle for a legal entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRun {
    /// Identity and timestamps.
    #[serde(flatten)]
    pub meta: DocumentMeta,
    /// Pay month in `YYYY-MM` form.
    pub period: String,
    /// Legal entity or department being paid.
    pub entity: String,
    /// Why a reviewer rejected the run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    /// Current lifecycle state.
    #[serde(default)]
    pub status: PayrollRunStatus,
}

impl PayrollRun {
    /// Parses a `YYYY-MM` period into the first day of that month.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_payroll::models::PayrollRun;
    /// use chrono::NaiveDate;
    ///
    /// assert_eq!(
    ///     PayrollRun::period_start("2025-07"),
    ///     NaiveDate::from_ymd_opt(2025, 7, 1)
    /// );
    /// assert_eq!(PayrollRun::period_start("2025-13"), None);
    /// assert_eq!(PayrollRun::period_start("July"), None);
    /// ```
    pub fn period_start(period: &str) -> Option<NaiveDate> {
        if period.len() != 7 {
            return None;
        }
        NaiveDate::parse_from_str(&format!("{}-01", period), "%Y-%m-%d").ok()
    }
}

impl Document for PayrollRun {
    const COLLECTION: &'static str = "payroll_runs";
    const RESOURCE: &'static str = "PayrollRun";

    fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut DocumentMeta {
        &mut self.meta
    }
}
