//! Ticket models for Zoho Desk.
//!
//! This module defines the caller-side mutation request, the partial-update
//! bodies sent to the API, and the response mirrors for ticket mutations and
//! ticket detail lookups.
//!
//! The client rejects any response carrying `message` before it reaches these
//! types, so a returned result has `error_msg == None`. The field is decoded
//! for callers parsing bodies themselves.

use serde::{Deserialize, Serialize};

/// Status that reassignment always applies.
pub const REASSIGN_STATUS: &str = "Open";

/// Caller input for reassignment and department transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketMutationRequest {
    /// Ticket to modify.
    pub ticket_id: String,

    /// Agent to assign.
    pub assignee_id: Option<String>,

    /// Target department.
    pub department_id: Option<String>,

    /// Requested status. Reassignment and transfer ignore this field.
    pub status: Option<String>,
}

impl TicketMutationRequest {
    /// Creates a request for the given ticket with no changes set.
    pub fn new(ticket_id: impl Into<String>) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            ..Self::default()
        }
    }

    /// Sets the assignee.
    pub fn with_assignee(mut self, assignee_id: impl Into<String>) -> Self {
        self.assignee_id = Some(assignee_id.into());
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = Some(department_id.into());
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Partial-update body for `PATCH /tickets/{id}`.
///
/// Unset fields are omitted from the JSON so the server leaves them alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPatch {
    /// New assignee id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,

    /// New department id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,

    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl TicketPatch {
    /// Body that changes only the status.
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }

    /// Body for reassignment: assignee and department from the request,
    /// status forced to [`REASSIGN_STATUS`].
    pub fn reassign(request: &TicketMutationRequest) -> Self {
        Self {
            assignee_id: request.assignee_id.clone(),
            department_id: request.department_id.clone(),
            status: Some(REASSIGN_STATUS.to_string()),
        }
    }
}

/// Body for `POST /tickets/{id}/move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTicketBody {
    /// Department to move the ticket to.
    pub department_id: String,
}

/// Response mirror for ticket update and move operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketMutationResult {
    /// Ticket id.
    #[serde(default)]
    pub id: Option<String>,

    /// Human-facing ticket number.
    #[serde(default)]
    pub ticket_number: Option<String>,

    /// Last modification timestamp (ISO 8601).
    #[serde(default)]
    pub modified_time: Option<String>,

    /// Status category (e.g., `Open`, `Closed`).
    #[serde(default)]
    pub status_type: Option<String>,

    /// Current department id.
    #[serde(default)]
    pub department_id: Option<String>,

    /// Whether the ticket is in the trash.
    #[serde(default)]
    pub is_deleted: bool,

    /// Current assignee id.
    #[serde(default)]
    pub assignee_id: Option<String>,

    /// Current status.
    #[serde(default)]
    pub status: Option<String>,

    /// Error message set by the API on logical failure.
    #[serde(default, rename = "message")]
    pub error_msg: Option<String>,

    /// Error code set by the API on logical failure.
    #[serde(default)]
    pub error_code: Option<String>,
}

impl TicketMutationResult {
    /// Returns true if the API reported a logical failure.
    pub fn is_error(&self) -> bool {
        self.error_msg
            .as_deref()
            .is_some_and(|m| !m.trim().is_empty())
    }
}

/// Assignee names embedded by `include=assignee`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketAssignee {
    /// Assignee id.
    #[serde(default)]
    pub id: Option<String>,

    /// First name.
    #[serde(default)]
    pub first_name: Option<String>,

    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,
}

impl TicketAssignee {
    /// Returns "First Last", skipping missing parts.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Custom fields read from a ticket's `cf` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TicketCustomFields {
    /// Reason field.
    #[serde(default)]
    pub cf_reason: Option<String>,

    /// Reminder date field.
    #[serde(default)]
    pub cf_reminderdate: Option<String>,
}

/// Response mirror for `GET /tickets/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDetail {
    /// Ticket id.
    #[serde(default)]
    pub id: Option<String>,

    /// Human-facing ticket number.
    #[serde(default)]
    pub ticket_number: Option<String>,

    /// Last modification timestamp.
    #[serde(default)]
    pub modified_time: Option<String>,

    /// Closing timestamp; null for open tickets.
    #[serde(default)]
    pub closed_time: Option<String>,

    /// Current department id.
    #[serde(default)]
    pub department_id: Option<String>,

    /// Current assignee id.
    #[serde(default)]
    pub assignee_id: Option<String>,

    /// Whether the ticket is in the trash.
    #[serde(default)]
    pub is_deleted: bool,

    /// Current status.
    #[serde(default)]
    pub status: Option<String>,

    /// Error message set by the API on logical failure.
    #[serde(default, rename = "message")]
    pub error_msg: Option<String>,

    /// Error code set by the API on logical failure.
    #[serde(default)]
    pub error_code: Option<String>,

    /// Embedded assignee; null when the ticket is unassigned.
    #[serde(default)]
    pub assignee: Option<TicketAssignee>,

    /// Custom fields.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cf: TicketCustomFields,
}

impl TicketDetail {
    /// Returns true if the API reported a logical failure.
    pub fn is_error(&self) -> bool {
        self.error_msg
            .as_deref()
            .is_some_and(|m| !m.trim().is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_status_patch_has_only_status() {
        let body = serde_json::to_value(TicketPatch::status("Closed")).unwrap();
        assert_eq!(body, json!({"status": "Closed"}));
    }

    #[test]
    fn test_reassign_patch_forces_open() {
        let request = TicketMutationRequest::new("100")
            .with_assignee("7")
            .with_department("5")
            .with_status("On Hold");
        let body = serde_json::to_value(TicketPatch::reassign(&request)).unwrap();
        assert_eq!(
            body,
            json!({"assigneeId": "7", "departmentId": "5", "status": "Open"})
        );
    }

    #[test]
    fn test_reassign_patch_omits_unset_department() {
        let request = TicketMutationRequest::new("100").with_assignee("7");
        let body = serde_json::to_value(TicketPatch::reassign(&request)).unwrap();
        assert_eq!(body, json!({"assigneeId": "7", "status": "Open"}));
    }

    #[test]
    fn test_move_body() {
        let body = serde_json::to_value(MoveTicketBody {
            department_id: "5".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({"departmentId": "5"}));
    }

    #[test]
    fn test_mutation_result_with_message_is_error() {
        let json = r#"{"errorCode":"INVALID_DATA","message":"An invalid status was given"}"#;
        let result: TicketMutationResult = serde_json::from_str(json).unwrap();
        assert!(result.is_error());
        assert_eq!(result.error_msg.as_deref(), Some("An invalid status was given"));
        assert_eq!(result.error_code.as_deref(), Some("INVALID_DATA"));
    }

    #[test]
    fn test_mutation_result_without_message_is_ok() {
        let json = r#"{"ticketNumber":"100","departmentId":"5","isDeleted":false}"#;
        let result: TicketMutationResult = serde_json::from_str(json).unwrap();
        assert!(!result.is_error());
        assert_eq!(result.ticket_number.as_deref(), Some("100"));
        assert_eq!(result.department_id.as_deref(), Some("5"));
        assert!(result.error_msg.is_none());
    }

    #[test]
    fn test_ticket_detail_nested_fields() {
        let json = r#"{
            "id": "9000",
            "ticketNumber": "101",
            "closedTime": null,
            "assigneeId": "7",
            "status": "Open",
            "assignee": {"id": "7", "firstName": "Jane", "lastName": "Smith"},
            "cf": {"cf_reason": "Billing", "cf_reminderdate": "2024-05-01"},
            "departments": [{"id": "5", "name": "Support"}]
        }"#;
        let detail: TicketDetail = serde_json::from_str(json).unwrap();
        assert!(detail.closed_time.is_none());
        assert_eq!(detail.assignee.as_ref().unwrap().full_name(), "Jane Smith");
        assert_eq!(detail.cf.cf_reason.as_deref(), Some("Billing"));
        assert_eq!(detail.cf.cf_reminderdate.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn test_ticket_detail_tolerates_null_nested_objects() {
        let json = r#"{"id": "9000", "assignee": null, "cf": null}"#;
        let detail: TicketDetail = serde_json::from_str(json).unwrap();
        assert!(detail.assignee.is_none());
        assert_eq!(detail.cf, TicketCustomFields::default());
    }

    #[test]
    fn test_assignee_full_name_skips_missing_parts() {
        let assignee = TicketAssignee {
            first_name: None,
            last_name: Some("Smith".to_string()),
            ..TicketAssignee::default()
        };
        assert_eq!(assignee.full_name(), "Smith");
    }
}
