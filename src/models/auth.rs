//! OAuth token models.

use serde::Deserialize;

/// Access token returned by the refresh-token exchange.
///
/// The token is not stored or refreshed by the client; callers decide when
/// to exchange again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccessToken {
    /// Bearer credential presented on every Desk call.
    #[serde(default)]
    pub access_token: String,

    /// Token type reported by the accounts server (e.g., `Bearer`).
    #[serde(default)]
    pub token_type: String,

    /// Lifetime in seconds.
    #[serde(default)]
    pub expires_in: u64,

    /// OAuth error string, set instead of a token when the exchange is rejected.
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_access_token_deserialize() {
        let json = r#"{"access_token":"abc","token_type":"Bearer","expires_in":3600,"api_domain":"https://www.zohoapis.com"}"#;
        let token: AccessToken = serde_json::from_str(json).unwrap();
        assert_eq!(
            token,
            AccessToken {
                access_token: "abc".to_string(),
                token_type: "Bearer".to_string(),
                expires_in: 3600,
                error: None,
            }
        );
    }

    #[test]
    fn test_access_token_rejected() {
        let token: AccessToken = serde_json::from_str(r#"{"error":"invalid_code"}"#).unwrap();
        assert!(token.access_token.is_empty());
        assert_eq!(token.error.as_deref(), Some("invalid_code"));
    }
}
