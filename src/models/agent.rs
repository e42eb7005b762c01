//! Agent models for Zoho Desk.
//!
//! Agents are the staff members tickets can be assigned to.

use serde::Deserialize;

/// A Desk agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Unique agent id.
    #[serde(default)]
    pub id: String,

    /// First name.
    #[serde(default)]
    pub first_name: Option<String>,

    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,

    /// Full display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Role id.
    #[serde(default)]
    pub role_id: Option<String>,

    /// Email address.
    #[serde(default)]
    pub email_id: Option<String>,

    /// Mobile number.
    #[serde(default)]
    pub mobile: Option<String>,

    /// Agent status (e.g., `ACTIVE`).
    #[serde(default)]
    pub status: Option<String>,

    /// Free-text "about" field. Some tenants store a staff code here.
    #[serde(default)]
    pub about_info: Option<String>,

    /// Ids of the departments the agent belongs to, in API order.
    #[serde(default)]
    pub associated_department_ids: Vec<String>,
}

impl Agent {
    /// Returns the display name, falling back to email or ID.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email_id.as_deref())
            .unwrap_or(&self.id)
    }

    /// Returns true if the agent belongs to the given department.
    pub fn in_department(&self, department_id: &str) -> bool {
        self.associated_department_ids
            .iter()
            .any(|id| id == department_id)
    }
}

/// Response wrapper for the agents endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentList {
    /// Agents in the order returned by the API.
    #[serde(default)]
    pub data: Vec<Agent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_deserialize() {
        let json = r#"{
            "id": "456",
            "firstName": "Jane",
            "lastName": "Smith",
            "name": "Jane Smith",
            "roleId": "9",
            "emailId": "jane@example.com",
            "mobile": null,
            "status": "ACTIVE",
            "aboutInfo": "ST-17",
            "associatedDepartmentIds": ["5", "3"]
        }"#;
        let agent: Agent = serde_json::from_str(json).unwrap();
        assert_eq!(agent.id, "456");
        assert_eq!(agent.display_name(), "Jane Smith");
        assert_eq!(agent.about_info.as_deref(), Some("ST-17"));
        assert_eq!(agent.associated_department_ids, vec!["5", "3"]);
        assert!(agent.in_department("3"));
        assert!(!agent.in_department("4"));
    }

    #[test]
    fn test_agent_display_name_fallback() {
        let agent = Agent {
            id: "123".to_string(),
            email_id: Some("john@example.com".to_string()),
            ..Agent::default()
        };
        assert_eq!(agent.display_name(), "john@example.com");

        let agent = Agent {
            id: "123".to_string(),
            ..Agent::default()
        };
        assert_eq!(agent.display_name(), "123");
    }
}
