//! Request bodies for interviews, offers and contracts.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ServiceResult;
use crate::models::{
    Contract, ContractStatus, DEFAULT_INTERVIEW_STATUS, Document, DocumentMeta, Interview, Offer,
    OfferStatus,
};
use crate::workflow::{transition_str, TransitionPolicy};

use super::FieldCheck;

/// Body of `POST /api/interviews`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterviewRequest {
    /// The application being interviewed.
    pub application_id: Option<String>,
    /// Interview stage.
    #[serde(default)]
    pub stage: Option<String>,
    /// When the interview takes place.
    #[serde(default)]
    pub scheduled_date: Option<DateTime<Utc>>,
    /// Interview medium.
    #[serde(default)]
    pub method: Option<String>,
    /// Panel member ids.
    #[serde(default)]
    pub panel: Vec<String>,
    /// Initial free-form status.
    #[serde(default)]
    pub status: Option<String>,
}

impl CreateInterviewRequest {
    /// Validates the body and builds a new interview.
    pub fn into_document(self) -> ServiceResult<Interview> {
        let mut check = FieldCheck::new(Interview::RESOURCE);
        let Some(application_id) = check.text("applicationId", self.application_id) else {
            return Err(check.into_error());
        };
        check.finish()?;

        Ok(Interview {
            meta: DocumentMeta::new(),
            application_id,
            stage: self.stage,
            scheduled_date: self.scheduled_date,
            method: self.method,
            panel: self.panel,
            feedback: None,
            score: None,
            status: self
                .status
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_INTERVIEW_STATUS.to_string()),
        })
    }
}

/// Body of `PATCH /api/interviews/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterviewRequest {
    /// New stage.
    pub stage: Option<String>,
    /// New time.
    pub scheduled_date: Option<DateTime<Utc>>,
    /// New medium.
    pub method: Option<String>,
    /// Replacement panel.
    pub panel: Option<Vec<String>>,
    /// Interviewer feedback.
    pub feedback: Option<String>,
    /// Panel score.
    pub score: Option<u8>,
    /// New free-form status.
    pub status: Option<String>,
}

impl UpdateInterviewRequest {
    /// Applies the patch.
    pub fn apply(self, interview: &mut Interview) -> ServiceResult<()> {
        if let Some(stage) = self.stage {
            interview.stage = Some(stage);
        }
        if let Some(date) = self.scheduled_date {
            interview.scheduled_date = Some(date);
        }
        if let Some(method) = self.method {
            interview.method = Some(method);
        }
        if let Some(panel) = self.panel {
            interview.panel = panel;
        }
        if let Some(feedback) = self.feedback {
            interview.feedback = Some(feedback);
        }
        if let Some(score) = self.score {
            interview.score = Some(score);
        }
        if let Some(status) = self.status {
            interview.status = status;
        }
        Ok(())
    }
}

/// Body of `POST /api/offers`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfferRequest {
    /// The application this offer answers.
    pub application_id: Option<String>,
    /// Offered annual salary.
    pub salary: Option<Decimal>,
    /// Proposed first day.
    pub start_date: Option<NaiveDate>,
    /// Position title.
    #[serde(default)]
    pub position: Option<String>,
    /// Benefits in the package.
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl CreateOfferRequest {
    /// Validates the body and builds a new offer in `Draft`.
    pub fn into_document(self) -> ServiceResult<Offer> {
        let mut check = FieldCheck::new(Offer::RESOURCE);
        let application_id = check.text("applicationId", self.application_id);
        let salary = check.required("salary", self.salary);
        let start_date = check.required("startDate", self.start_date);
        let (Some(application_id), Some(salary), Some(start_date)) =
            (application_id, salary, start_date)
        else {
            return Err(check.into_error());
        };
        check.non_negative("salary", salary);
        check.finish()?;

        Ok(Offer {
            meta: DocumentMeta::new(),
            application_id,
            salary,
            start_date,
            position: self.position,
            benefits: self.benefits,
            notes: self.notes,
            status: OfferStatus::Draft,
        })
    }
}

/// Body of `PATCH /api/offers/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOfferRequest {
    /// New salary.
    pub salary: Option<Decimal>,
    /// New start date.
    pub start_date: Option<NaiveDate>,
    /// New position title.
    pub position: Option<String>,
    /// Replacement benefits.
    pub benefits: Option<Vec<String>>,
    /// New notes.
    pub notes: Option<String>,
    /// New status.
    pub status: Option<String>,
}

impl UpdateOfferRequest {
    /// Applies the patch, checking the status change against the offer workflow.
    pub fn apply(self, offer: &mut Offer, policy: TransitionPolicy) -> ServiceResult<()> {
        let mut check = FieldCheck::new(Offer::RESOURCE);
        if let Some(salary) = self.salary {
            check.non_negative("salary", salary);
            offer.salary = salary;
        }
        check.finish()?;

        if let Some(start_date) = self.start_date {
            offer.start_date = start_date;
        }
        if let Some(position) = self.position {
            offer.position = Some(position);
        }
        if let Some(benefits) = self.benefits {
            offer.benefits = benefits;
        }
        if let Some(notes) = self.notes {
            offer.notes = Some(notes);
        }
        if let Some(status) = self.status {
            offer.status = transition_str(Offer::RESOURCE, offer.status, &status, policy)?;
        }
        Ok(())
    }
}

/// Body of `POST /api/contracts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContractRequest {
    /// The originating application.
    pub application_id: Option<String>,
    /// The accepted offer.
    pub offer_id: Option<String>,
    /// Contracted salary.
    pub salary: Option<Decimal>,
    /// First day of employment.
    pub start_date: Option<NaiveDate>,
    /// Last day for fixed-term contracts.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Signature time.
    #[serde(default)]
    pub signed_at: Option<DateTime<Utc>>,
}

impl CreateContractRequest {
    /// Validates the body and builds a new active contract.
    pub fn into_document(self) -> ServiceResult<Contract> {
        let mut check = FieldCheck::new(Contract::RESOURCE);
        let application_id = check.text("applicationId", self.application_id);
        let offer_id = check.text("offerId", self.offer_id);
        let salary = check.required("salary", self.salary);
        let start_date = check.required("startDate", self.start_date);
        let (Some(application_id), Some(offer_id), Some(salary), Some(start_date)) =
            (application_id, offer_id, salary, start_date)
        else {
            return Err(check.into_error());
        };
        check.non_negative("salary", salary);
        if self.end_date.is_some_and(|end| end < start_date) {
            check.fail("endDate must not be before startDate");
        }
        check.finish()?;

        Ok(Contract {
            meta: DocumentMeta::new(),
            application_id,
            offer_id,
            salary,
            start_date,
            end_date: self.end_date,
            signed_at: self.signed_at,
            status: ContractStatus::Active,
        })
    }
}

/// Body of `PATCH /api/contracts/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContractRequest {
    /// New salary.
    pub salary: Option<Decimal>,
    /// New end date.
    pub end_date: Option<NaiveDate>,
    /// Signature time.
    pub signed_at: Option<DateTime<Utc>>,
    /// New status.
    pub status: Option<String>,
}

impl UpdateContractRequest {
    /// Applies the patch, checking the status change against the contract workflow.
    pub fn apply(self, contract: &mut Contract, policy: TransitionPolicy) -> ServiceResult<()> {
        let mut check = FieldCheck::new(Contract::RESOURCE);
        if let Some(salary) = self.salary {
            check.non_negative("salary", salary);
            contract.salary = salary;
        }
        if let Some(end_date) = self.end_date {
            if end_date < contract.start_date {
                check.fail("endDate must not be before startDate");
            }
            contract.end_date = Some(end_date);
        }
        check.finish()?;

        if let Some(signed_at) = self.signed_at {
            contract.signed_at = Some(signed_at);
        }
        if let Some(status) = self.status {
            contract.status = transition_str(Contract::RESOURCE, contract.status, &status, policy)?;
        }
        Ok(())
    }
}
