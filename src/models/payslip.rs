//! Payslip model and per-run totals.
//!
//! This module contains the [`Payslip`] record issued to each employee in a
//! payroll run and the [`RunTotals`] summary computed over a run's payslips.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::workflow::{ClosedSet, StatusWorkflow};

use super::document::{Document, DocumentMeta};

/// Payment state of a [`Payslip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayslipStatus {
    /// Generated, not yet paid.
    #[default]
    Pending,
    /// Paid to the employee.
    Paid,
}

impl ClosedSet for PayslipStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::Paid];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

impl StatusWorkflow for PayslipStatus {
    fn successors(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Paid],
            Self::Paid => &[],
        }
    }
}

/// An employee's pay statement for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payslip {
    /// Identity and timestamps.
    #[serde(flatten)]
    pub meta: DocumentMeta,
    /// The payroll run that produced this payslip.
    pub run_id: String,
    /// The employee being paid.
    pub employee_id: String,
    /// Gross pay before deductions.
    pub gross_pay: Decimal,
    /// Tax and other deductions.
    #[serde(default)]
    pub deductions: Decimal,
    /// Gross pay minus deductions.
    pub net_pay: Decimal,
    /// Current payment state.
    #[serde(default)]
    pub status: PayslipStatus,
}

impl Document for Payslip {
    const COLLECTION: &'static str = "payslips";
    const RESOURCE: &'static str = "Payslip";

    fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut DocumentMeta {
        &mut self.meta
    }
}

/// Aggregated figures for one payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTotals {
    /// The run being summarized.
    pub run_id: String,
    /// Number of payslips in the run.
    pub payslip_count: usize,
    /// Sum of gross pay.
    pub total_gross: Decimal,
    /// Sum of deductions.
    pub total_deductions: Decimal,
    /// Sum of net pay.
    pub total_net: Decimal,
}

impl RunTotals {
    /// Sums the payslips of a run.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_payroll::models::RunTotals;
    ///
    /// let totals = RunTotals::from_payslips("run_1", &[]);
    /// assert_eq!(totals.payslip_count, 0);
    /// assert!(totals.total_net.is_zero());
    /// ```
    pub fn from_payslips(run_id: impl Into<String>, payslips: &[Payslip]) -> Self {
        payslips.iter().fold(
            Self {
                run_id: run_id.into(),
                payslip_count: 0,
                total_gross: Decimal::ZERO,
                total_deductions: Decimal::ZERO,
                total_net: Decimal::ZERO,
            },
            |mut totals, payslip| {
                totals.payslip_count += 1;
                totals.total_gross += payslip.gross_pay;
                totals.total_deductions += payslip.deductions;
                totals.total_net += payslip.net_pay;
                totals
            },
        )
    }
}
