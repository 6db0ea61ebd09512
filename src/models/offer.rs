//! Job offer model.
//!
//! An offer is issued against an application and moves through
//! `Draft → Sent → {Accepted, Rejected}`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::workflow::{ClosedSet, StatusWorkflow};

use super::document::{Document, DocumentMeta};

/// Lifecycle state of an [`Offer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OfferStatus {
    /// Being prepared; not yet visible to the candidate.
    #[default]
    Draft,
    /// Sent to the candidate.
    Sent,
    /// Accepted by the candidate.
    Accepted,
    /// Declined by the candidate.
    Rejected,
}

impl ClosedSet for OfferStatus {
    const ALL: &'static [Self] = &[Self::Draft, Self::Sent, Self::Accepted, Self::Rejected];

    fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }
}

impl StatusWorkflow for OfferStatus {
    fn successors(self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::Sent],
            Self::Sent => &[Self::Accepted, Self::Rejected],
            Self::Accepted | Self::Rejected => &[],
        }
    }
}

/// An employment offer made to an applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Identity and timestamps.
    #[serde(flatten)]
    pub meta: DocumentMeta,
    /// The application this offer answers.
    pub application_id: String,
    /// Offered annual salary.
    pub salary: Decimal,
    /// Proposed first day of work.
    pub start_date: NaiveDate,
    /// Offered position title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Benefits included in the package.
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Current lifecycle state.
    #[serde(default)]
    pub status: OfferStatus,
}

impl Document for Offer {
    const COLLECTION: &'static str = "offers";
    const RESOURCE: &'static str = "Offer";

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
    fn test_status_serializes_as_title_case() {
        assert_eq!(serde_json::to_string(&OfferStatus::Draft).unwrap(), "\"Draft\"");
        assert_eq!(
            serde_json::from_str::<OfferStatus>("\"Accepted\"").unwrap(),
            OfferStatus::Accepted
        );
    }

    #[test]
    fn test_offer_json_shape() {
        let offer = Offer {
            meta: DocumentMeta::new(),
            application_id: "A1".to_string(),
            salary: Decimal::new(50000, 0),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            position: None,
            benefits: vec![],
            notes: None,
            status: OfferStatus::default(),
        };
        let json = serde_json::to_value(&offer).unwrap();
        assert_eq!(json["applicationId"], "A1");
        assert_eq!(json["startDate"], "2024-01-01");
        assert_eq!(json["status"], "Draft");
        assert!(json.get("_id").is_some());
        assert!(json.get("position").is_none());
    }
}
