//! Document schemas for the HR payroll service.
//!
//! One module per record type. Every record embeds [`DocumentMeta`] and
//! implements [`Document`]; records with a closed status set also define a
//! [`StatusWorkflow`](crate::workflow::StatusWorkflow) enum.

mod approval;
mod claim;
mod clearance;
mod contract;
mod document;
mod interview;
mod irregularity;
mod offer;
mod payroll_run;
mod payslip;
mod refund;
mod signing_bonus;
mod termination;

pub use approval::{Approval, ApprovalStatus, ApproverRole};
pub use claim::{Claim, ClaimStatus};
pub use clearance::{ClearanceChecklist, ClearanceItem, ClearanceStatus};
pub use contract::{Contract, ContractStatus};
pub use document::{Document, DocumentId, DocumentMeta};
pub use interview::{DEFAULT_INTERVIEW_STATUS, Interview};
pub use irregularity::{Irregularity, IrregularityStatus, Severity};
pub use offer::{Offer, OfferStatus};
pub use payroll_run::{PayrollRun, PayrollRunStatus};
pub use payslip::{Payslip, PayslipStatus, RunTotals};
pub use refund::{Refund, RefundStatus};
pub use signing_bonus::{SigningBonus, SigningBonusStatus};
pub use termination::{Termination, TerminationStatus};
