//! Interview model.
//!
//! Interviews carry a free-form status; unlike the other records there is
//! no closed set and no transition table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::document::{Document, DocumentMeta};

/// Status given to interviews created without one.
pub const DEFAULT_INTERVIEW_STATUS: &str = "scheduled";

/// A scheduled or completed interview for an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    /// Identity and timestamps.
    #[serde(flatten)]
    pub meta: DocumentMeta,
    /// The application being interviewed.
    pub application_id: String,
    /// Interview stage, e.g. "screening" or "technical".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    /// When the interview takes place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
    /// Medium, e.g. "onsite" or "video".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Identifiers of the panel members.
    #[serde(default)]
    pub panel: Vec<String>,
    /// Interviewer feedback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    /// Overall score given by the panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    /// Free-form status.
    pub status: String,
}

impl Document for Interview {
    const COLLECTION: &'static str = "interviews";
    const RESOURCE: &'static str = "Interview";

    fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut DocumentMeta {
        &mut self.meta
    }
}
