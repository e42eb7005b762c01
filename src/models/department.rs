//! Department models.

use serde::Deserialize;

/// A Desk department.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// Unique department id.
    #[serde(default)]
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,

    /// Whether the department accepts tickets.
    #[serde(default)]
    pub is_enabled: bool,
}

/// Response wrapper for the departments endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepartmentList {
    /// Departments in the order returned by the API.
    #[serde(default)]
    pub data: Vec<Department>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_deserialize() {
        let json = r#"{"data":[{"id":"1","name":"Support","description":null,"isEnabled":true}]}"#;
        let list: DepartmentList = serde_json::from_str(json).unwrap();
        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0].name, "Support");
        assert!(list.data[0].description.is_none());
        assert!(list.data[0].is_enabled);
    }
}
