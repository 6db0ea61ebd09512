//! Request bodies for terminations and clearance checklists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ServiceResult;
use crate::models::{
    ClearanceChecklist, ClearanceItem, ClearanceStatus, Document, DocumentMeta, Termination,
    TerminationStatus,
};
use crate::workflow::{transition_str, TransitionPolicy};

use super::FieldCheck;

/// Body of `POST /api/terminations`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTerminationRequest {
    /// The employee leaving.
    pub employee_id: Option<String>,
    /// Why the employment ends.
    pub reason: Option<String>,
    /// Effective last day.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
}

impl CreateTerminationRequest {
    /// Validates the body and builds a pending termination.
    pub fn into_document(self) -> ServiceResult<Termination> {
        let mut check = FieldCheck::new(Termination::RESOURCE);
        let employee_id = check.text("employeeId", self.employee_id);
        let reason = check.text("reason", self.reason);
        let (Some(employee_id), Some(reason)) = (employee_id, reason) else {
            return Err(check.into_error());
        };
        check.finish()?;

        Ok(Termination {
            meta: DocumentMeta::new(),
            employee_id,
            reason,
            termination_date: self.termination_date,
            approved_by: None,
            approved_at: None,
            status: TerminationStatus::Pending,
        })
    }
}

/// Optional body of `POST /api/terminations/{id}/approve`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveTerminationRequest {
    /// Who is approving.
    #[serde(default)]
    pub approved_by: Option<String>,
}

/// Body of `POST /api/clearance-checklists`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClearanceChecklistRequest {
    /// The termination this checklist belongs to.
    pub termination_id: Option<String>,
    /// The departing employee.
    pub employee_id: Option<String>,
    /// Department sign-offs.
    #[serde(default)]
    pub items: Vec<ClearanceItem>,
}

impl CreateClearanceChecklistRequest {
    /// Validates the body and builds a pending checklist.
    pub fn into_document(self) -> ServiceResult<ClearanceChecklist> {
        let mut check = FieldCheck::new(ClearanceChecklist::RESOURCE);
        let termination_id = check.text("terminationId", self.termination_id);
        let employee_id = check.text("employeeId", self.employee_id);
        let (Some(termination_id), Some(employee_id)) = (termination_id, employee_id) else {
            return Err(check.into_error());
        };
        check_items(&mut check, &self.items);
        check.finish()?;

        Ok(ClearanceChecklist {
            meta: DocumentMeta::new(),
            termination_id,
            employee_id,
            items: self.items,
            equipment_returned: false,
            access_card_returned: false,
            status: ClearanceStatus::Pending,
        })
    }
}

/// Body of `PATCH /api/clearance-checklists/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClearanceChecklistRequest {
    /// Replacement sign-off list.
    pub items: Option<Vec<ClearanceItem>>,
    /// Equipment handed back.
    pub equipment_returned: Option<bool>,
    /// Access card handed back.
    pub access_card_returned: Option<bool>,
    /// New status.
    pub status: Option<String>,
}

impl UpdateClearanceChecklistRequest {
    /// Applies the patch.
    ///
    /// Completing the checklist requires every item to be cleared.
    pub fn apply(
        self,
        checklist: &mut ClearanceChecklist,
        policy: TransitionPolicy,
    ) -> ServiceResult<()> {
        let mut check = FieldCheck::new(ClearanceChecklist::RESOURCE);
        if let Some(items) = self.items {
            check_items(&mut check, &items);
            checklist.items = items;
        }
        if let Some(returned) = self.equipment_returned {
            checklist.equipment_returned = returned;
        }
        if let Some(returned) = self.access_card_returned {
            checklist.access_card_returned = returned;
        }
        if let Some(status) = self.status {
            checklist.status = transition_str(
                ClearanceChecklist::RESOURCE,
                checklist.status,
                &status,
                policy,
            )?;
        }
        if checklist.status == ClearanceStatus::Completed {
            let outstanding = checklist.outstanding();
            if !outstanding.is_empty() {
                check.fail(format!(
                    "cannot complete with outstanding departments: {}",
                    outstanding.join(", ")
                ));
            }
        }
        check.finish()
    }
}

fn check_items(check: &mut FieldCheck, items: &[ClearanceItem]) {
    if items.iter().any(|item| item.department.trim().is_empty()) {
        check.fail("items.department is required");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checklist(items: Vec<ClearanceItem>) -> ClearanceChecklist {
        CreateClearanceChecklistRequest {
            termination_id: Some("t1".to_string()),
            employee_id: Some("e1".to_string()),
            items,
        }
        .into_document()
        .unwrap()
    }

    fn item(department: &str, cleared: bool) -> ClearanceItem {
        ClearanceItem {
            department: department.to_string(),
            cleared,
            comments: None,
        }
    }

    #[test]
    fn test_termination_requires_employee_and_reason() {
        let err = CreateTerminationRequest::default()
            .into_document()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Termination validation failed: employeeId is required, reason is required"
        );
    }

    #[test]
    fn test_cannot_complete_with_uncleared_items() {
        let mut list = checklist(vec![item("IT", true), item("Finance", false)]);
        let err = UpdateClearanceChecklistRequest {
            status: Some("completed".to_string()),
            ..Default::default()
        }
        .apply(&mut list, TransitionPolicy::GUARDED)
        .unwrap_err();
        assert!(err.to_string().contains("Finance"));
    }

    #[test]
    fn test_complete_after_clearing_everything() {
        let mut list = checklist(vec![item("IT", false)]);
        UpdateClearanceChecklistRequest {
            items: Some(vec![item("IT", true)]),
            equipment_returned: Some(true),
            status: Some("completed".to_string()),
            ..Default::default()
        }
        .apply(&mut list, TransitionPolicy::GUARDED)
        .unwrap();
        assert_eq!(list.status, ClearanceStatus::Completed);
        assert!(list.equipment_returned);
    }

    #[test]
    fn test_blank_department_rejected() {
        let err = CreateClearanceChecklistRequest {
            termination_id: Some("t1".to_string()),
            employee_id: Some("e1".to_string()),
            items: vec![item(" ", false)],
        }
        .into_document()
        .unwrap_err();
        assert!(err.to_string().contains("items.department is required"));
    }
}
