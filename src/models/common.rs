//! Common types shared across Zoho Desk API models.
//!
//! This module defines the error envelope the service returns on failures,
//! a lenient id deserializer, and the body decoder used for every response.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::DeskError;

/// Error envelope returned by the Desk API.
///
/// Desk failures carry `errorCode` and `message`; the OAuth endpoint reports
/// failures through a bare `error` field instead.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Desk error code (e.g. `INVALID_DATA`, `UNAUTHORIZED`).
    #[serde(default)]
    pub error_code: Option<String>,

    /// Human-readable error message.
    #[serde(default)]
    pub message: Option<String>,

    /// OAuth error string (e.g. `invalid_code`).
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Returns the first non-empty message carried by the envelope.
    pub fn message(&self) -> Option<&str> {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }

    /// Converts the envelope into an API error if it carries a message.
    pub fn into_error(self, status: Option<reqwest::StatusCode>) -> Option<DeskError> {
        let message = self.message()?.to_string();
        Some(DeskError::api(status, self.error_code, message))
    }
}

/// Decodes a response body, treating an empty body as `T::default()`.
///
/// # Errors
///
/// Returns `DeskError::Decode` if a non-empty body is not valid JSON for `T`.
pub fn decode_body<T>(body: &str) -> Result<T, DeskError>
where
    T: DeserializeOwned + Default,
{
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(body).map_err(DeskError::Decode)
}

/// Deserializes an id that the API may send as either a string or an integer.
pub(crate) fn deserialize_string_or_int<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct StringOrIntVisitor;

    impl<'de> Visitor<'de> for StringOrIntVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or an integer")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(StringOrIntVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Probe {
        #[serde(default)]
        name: String,
    }

    #[test]
    fn test_decode_body_empty_is_default() {
        let probe: Probe = decode_body("").unwrap();
        assert_eq!(probe.name, "");

        let probe: Probe = decode_body("  \n").unwrap();
        assert_eq!(probe.name, "");
    }

    #[test]
    fn test_decode_body_malformed_is_decode_error() {
        let err = decode_body::<Probe>("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, DeskError::Decode(_)));
    }

    #[test]
    fn test_error_body_prefers_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"errorCode":"INVALID_DATA","message":"bad status"}"#).unwrap();
        assert_eq!(body.message(), Some("bad status"));

        let err = body.into_error(None).unwrap();
        assert!(matches!(
            err,
            DeskError::Api { ref code, .. } if code.as_deref() == Some("INVALID_DATA")
        ));
    }

    #[test]
    fn test_error_body_falls_back_to_oauth_error() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"invalid_code"}"#).unwrap();
        assert_eq!(body.message(), Some("invalid_code"));
    }

    #[test]
    fn test_error_body_without_message_is_not_an_error() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"id":"1"}"#).unwrap();
        assert!(body.message().is_none());
        assert!(body.into_error(None).is_none());
    }
}
