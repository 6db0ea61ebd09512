//! Request bodies for payroll runs, approvals, signing bonuses, payslips and
//! irregularities.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ServiceResult;
use crate::models::{
    Approval, ApprovalStatus, ApproverRole, Document, DocumentMeta, Irregularity,
    IrregularityStatus, PayrollRun, PayrollRunStatus, Payslip, PayslipStatus, Severity,
    SigningBonus, SigningBonusStatus,
};
use crate::workflow::{transition, transition_str, ClosedSet, StatusWorkflow, TransitionPolicy};

use super::FieldCheck;

/// Query string accepted by list endpoints scoped to a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunFilter {
    /// Only return records belonging to this run.
    #[serde(default)]
    pub run_id: Option<String>,
}

impl RunFilter {
    /// Returns true if `run_id` passes the filter.
    pub fn matches(&self, run_id: &str) -> bool {
        self.run_id.as_deref().is_none_or(|wanted| wanted == run_id)
    }
}

/// Body of status-only updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// New status.
    pub status: Option<String>,
}

impl UpdateStatusRequest {
    /// Validates the requested status against the workflow of `resource`.
    pub fn next_status<S: StatusWorkflow>(
        self,
        resource: &'static str,
        current: S,
        policy: TransitionPolicy,
    ) -> ServiceResult<S> {
        let mut check = FieldCheck::new(resource);
        let Some(status) = check.text("status", self.status) else {
            return Err(check.into_error());
        };
        transition_str(resource, current, &status, policy)
    }
}

/// Body of `POST /payroll-execution/runs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayrollRunRequest {
    /// Pay month, `YYYY-MM`.
    pub period: Option<String>,
    /// Legal entity or department.
    pub entity: Option<String>,
}

impl CreatePayrollRunRequest {
    /// Validates the body and builds a draft run.
    pub fn into_document(self) -> ServiceResult<PayrollRun> {
        let mut check = FieldCheck::new(PayrollRun::RESOURCE);
        let period = check.text("period", self.period);
        let entity = check.text("entity", self.entity);
        let (Some(period), Some(entity)) = (period, entity) else {
            return Err(check.into_error());
        };
        if PayrollRun::period_start(&period).is_none() {
            check.fail(format!("period `{}` must be in YYYY-MM form", period));
        }
        check.finish()?;

        Ok(PayrollRun {
            meta: DocumentMeta::new(),
            period,
            entity,
            rejection_reason: None,
            status: PayrollRunStatus::Draft,
        })
    }
}

/// Body of `PATCH /payroll-execution/runs/{id}/status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayrollRunStatusRequest {
    /// New status.
    pub status: Option<String>,
    /// Required when rejecting.
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

impl UpdatePayrollRunStatusRequest {
    /// Applies the status change.
    pub fn apply(self, run: &mut PayrollRun, policy: TransitionPolicy) -> ServiceResult<()> {
        let next = UpdateStatusRequest {
            status: self.status,
        }
        .next_status(PayrollRun::RESOURCE, run.status, policy)?;

        let reason = self.rejection_reason.filter(|r| !r.trim().is_empty());
        if next == PayrollRunStatus::Rejected {
            let mut check = FieldCheck::new(PayrollRun::RESOURCE);
            let reason = check.required("rejectionReason", reason.or(run.rejection_reason.take()));
            check.finish()?;
            run.rejection_reason = reason;
        } else {
            run.rejection_reason = None;
        }
        run.status = next;
        Ok(())
    }
}

/// Body of `POST /payroll-execution/approvals`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApprovalRequest {
    /// The run under review.
    pub run_id: Option<String>,
    /// The person deciding.
    pub approver_id: Option<String>,
    /// `manager`, `finance` or `payroll`.
    pub approver_role: Option<String>,
    /// Note attached at creation.
    #[serde(default)]
    pub comment: Option<String>,
}

impl CreateApprovalRequest {
    /// Validates the body and builds a pending approval.
    pub fn into_document(self) -> ServiceResult<Approval> {
        let mut check = FieldCheck::new(Approval::RESOURCE);
        let run_id = check.text("runId", self.run_id);
        let approver_id = check.text("approverId", self.approver_id);
        let role = check.text("approverRole", self.approver_role);
        let (Some(run_id), Some(approver_id), Some(role)) = (run_id, approver_id, role) else {
            return Err(check.into_error());
        };
        let approver_role = ApproverRole::parse(&role)?;
        check.finish()?;

        Ok(Approval {
            meta: DocumentMeta::new(),
            run_id,
            approver_id,
            approver_role,
            comment: self.comment,
            decided_at: None,
            status: ApprovalStatus::Pending,
        })
    }
}

/// Optional body of the approve / reject endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApprovalDecisionRequest {
    /// Reason for the decision.
    #[serde(default)]
    pub comment: Option<String>,
}

impl ApprovalDecisionRequest {
    /// Records `decision` on the approval; `decidedAt` keeps the first decision time.
    pub fn decide(
        self,
        approval: &mut Approval,
        decision: ApprovalStatus,
        policy: TransitionPolicy,
    ) -> ServiceResult<()> {
        approval.status = transition(Approval::RESOURCE, approval.status, decision, policy)?;
        if let Some(comment) = self.comment {
            approval.comment = Some(comment);
        }
        if approval.status == ApprovalStatus::Pending {
            approval.decided_at = None;
        } else if approval.decided_at.is_none() {
            approval.decided_at = Some(Utc::now());
        }
        Ok(())
    }
}

/// Body of `POST /payroll-execution/signing-bonuses`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSigningBonusRequest {
    /// The new hire.
    pub employee_id: Option<String>,
    /// Bonus amount.
    pub amount: Option<Decimal>,
    /// Planned payment date.
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
}

impl CreateSigningBonusRequest {
    /// Validates the body and builds a pending bonus.
    pub fn into_document(self) -> ServiceResult<SigningBonus> {
        let mut check = FieldCheck::new(SigningBonus::RESOURCE);
        let employee_id = check.text("employeeId", self.employee_id);
        let amount = check.required("amount", self.amount);
        let (Some(employee_id), Some(amount)) = (employee_id, amount) else {
            return Err(check.into_error());
        };
        check.positive("amount", amount);
        check.finish()?;

        Ok(SigningBonus {
            meta: DocumentMeta::new(),
            employee_id,
            amount,
            payment_date: self.payment_date,
            status: SigningBonusStatus::Pending,
        })
    }
}

/// Body of `POST /payroll-execution/payslips`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayslipRequest {
    /// The producing run.
    pub run_id: Option<String>,
    /// The employee paid.
    pub employee_id: Option<String>,
    /// Gross pay.
    pub gross_pay: Option<Decimal>,
    /// Deductions; zero when omitted.
    #[serde(default)]
    pub deductions: Option<Decimal>,
}

impl CreatePayslipRequest {
    /// Validates the body and builds a pending payslip with derived net pay.
    pub fn into_document(self) -> ServiceResult<Payslip> {
        let mut check = FieldCheck::new(Payslip::RESOURCE);
        let run_id = check.text("runId", self.run_id);
        let employee_id = check.text("employeeId", self.employee_id);
        let gross_pay = check.required("grossPay", self.gross_pay);
        let (Some(run_id), Some(employee_id), Some(gross_pay)) = (run_id, employee_id, gross_pay)
        else {
            return Err(check.into_error());
        };
        let deductions = self.deductions.unwrap_or(Decimal::ZERO);
        check.non_negative("grossPay", gross_pay);
        check.non_negative("deductions", deductions);
        if deductions > gross_pay {
            check.fail("deductions must not exceed grossPay");
        }
        check.finish()?;

        Ok(Payslip {
            meta: DocumentMeta::new(),
            run_id,
            employee_id,
            gross_pay,
            deductions,
            net_pay: gross_pay - deductions,
            status: PayslipStatus::Pending,
        })
    }
}

/// Body of `POST /payroll-execution/irregularities`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIrregularityRequest {
    /// The run being reviewed.
    pub run_id: Option<String>,
    /// The affected employee.
    pub employee_id: Option<String>,
    /// What looks wrong.
    pub description: Option<String>,
    /// `low`, `medium` or `high`.
    #[serde(default)]
    pub severity: Option<String>,
}

impl CreateIrregularityRequest {
    /// Validates the body and builds an open irregularity.
    pub fn into_document(self) -> ServiceResult<Irregularity> {
        let mut check = FieldCheck::new(Irregularity::RESOURCE);
        let run_id = check.text("runId", self.run_id);
        let employee_id = check.text("employeeId", self.employee_id);
        let description = check.text("description", self.description);
        let (Some(run_id), Some(employee_id), Some(description)) =
            (run_id, employee_id, description)
        else {
            return Err(check.into_error());
        };
        let severity = match self.severity {
            Some(value) => Severity::parse(&value)?,
            None => Severity::default(),
        };
        check.finish()?;

        Ok(Irregularity {
            meta: DocumentMeta::new(),
            run_id,
            employee_id,
            description,
            severity,
            resolution: None,
            status: IrregularityStatus::Open,
        })
    }
}

/// Body of `PATCH /payroll-execution/irregularities/{id}/resolve`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveIrregularityRequest {
    /// How the irregularity was handled.
    pub resolution: Option<String>,
}

impl ResolveIrregularityRequest {
    /// Marks the irregularity resolved.
    pub fn apply(self, irregularity: &mut Irregularity, policy: TransitionPolicy) -> ServiceResult<()> {
        let mut check = FieldCheck::new(Irregularity::RESOURCE);
        let Some(resolution) = check.text("resolution", self.resolution) else {
            return Err(check.into_error());
        };
        irregularity.status = transition(
            Irregularity::RESOURCE,
            irregularity.status,
            IrregularityStatus::Resolved,
            policy,
        )?;
        irregularity.resolution = Some(resolution);
        Ok(())
    }
}
