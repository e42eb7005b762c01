//! Organization models.

use serde::Deserialize;

use super::common::deserialize_string_or_int;

/// An organization (portal) the caller belongs to.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Organization id. The API sends it as a number; it is kept as text.
    #[serde(default, deserialize_with = "deserialize_string_or_int")]
    pub id: String,

    /// Organization name.
    #[serde(default)]
    pub company_name: Option<String>,

    /// Portal name used in Desk URLs.
    #[serde(default)]
    pub portal_name: Option<String>,
}

/// Response wrapper for the organizations endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizationList {
    /// Organizations visible to the token.
    #[serde(default)]
    pub data: Vec<Organization>,
}

impl OrganizationList {
    /// Returns the id of the first organization, if any.
    pub fn first_id(&self) -> Option<&str> {
        self.data.first().map(|org| org.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_is_stringified() {
        let json = r#"{"data":[{"id":60001234567,"companyName":"Acme"},{"id":2}]}"#;
        let list: OrganizationList = serde_json::from_str(json).unwrap();
        assert_eq!(list.first_id(), Some("60001234567"));
        assert_eq!(list.data[0].company_name.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_string_id_is_kept() {
        let list: OrganizationList = serde_json::from_str(r#"{"data":[{"id":"42"}]}"#).unwrap();
        assert_eq!(list.first_id(), Some("42"));
    }

    #[test]
    fn test_empty_list_has_no_first_id() {
        let list: OrganizationList = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(list.first_id().is_none());
        assert!(OrganizationList::default().first_id().is_none());
    }
}
