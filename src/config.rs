//! Configuration for the Zoho Desk client.
//!
//! A [`Config`] holds the OAuth credentials and endpoint locations used by
//! [`DeskClient`](crate::desk_client::DeskClient). It is immutable once the
//! client is built. Configuration can be assembled in code with the `with_*`
//! builders or loaded from environment variables.

use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::DeskError;

/// Default Zoho accounts host that issues OAuth tokens.
pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.zoho.com";

/// Default path of the token endpoint under the accounts host.
pub const DEFAULT_TOKEN_SLUG: &str = "/oauth/v2/token";

/// Default Zoho Desk API root.
pub const DEFAULT_API_URL: &str = "https://desk.zoho.com/api/v1";

/// Default grant type for exchanging a refresh token.
pub const DEFAULT_GRANT_TYPE: &str = "refresh_token";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Credentials and endpoints for one Zoho Desk tenant.
///
/// The client secret and refresh token are never printed; the `Debug`
/// implementation redacts them.
#[derive(Clone)]
pub struct Config {
    /// Accounts host for token exchange (e.g., `https://accounts.zoho.com`).
    pub accounts_url: String,

    /// Token endpoint path appended to `accounts_url`.
    pub token_slug: String,

    /// Desk API root (e.g., `https://desk.zoho.com/api/v1`).
    pub api_url: String,

    /// OAuth client id.
    pub client_id: String,

    /// OAuth client secret. Never log this value.
    client_secret: String,

    /// Redirect URI registered for the OAuth client.
    pub redirect_uri: String,

    /// OAuth scope string (e.g., `Desk.tickets.ALL`).
    pub scope: String,

    /// Grant type sent with the refresh token.
    pub grant_type: String,

    /// Long-lived refresh token. Never log this value.
    refresh_token: String,

    /// Organization id sent in the `orgId` header, if known up front.
    pub org_id: Option<String>,

    /// Per-request timeout applied by the HTTP client.
    pub timeout: Duration,
}

impl Config {
    /// Creates a configuration with default endpoints for the given OAuth
    /// client and refresh token.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            accounts_url: DEFAULT_ACCOUNTS_URL.to_string(),
            token_slug: DEFAULT_TOKEN_SLUG.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: String::new(),
            scope: String::new(),
            grant_type: DEFAULT_GRANT_TYPE.to_string(),
            refresh_token: refresh_token.into(),
            org_id: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets the accounts host used for token exchange.
    pub fn with_accounts_url(mut self, url: impl Into<String>) -> Self {
        self.accounts_url = url.into();
        self
    }

    /// Sets the token endpoint path.
    pub fn with_token_slug(mut self, slug: impl Into<String>) -> Self {
        self.token_slug = slug.into();
        self
    }

    /// Sets the Desk API root.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Sets the OAuth redirect URI.
    pub fn with_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = uri.into();
        self
    }

    /// Sets the OAuth scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Sets the grant type.
    pub fn with_grant_type(mut self, grant_type: impl Into<String>) -> Self {
        self.grant_type = grant_type.into();
        self
    }

    /// Sets the organization id.
    pub fn with_org_id(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = Some(org_id.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the OAuth client secret.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Returns the refresh token.
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `ZOHO_CLIENT_ID`
    /// - `ZOHO_CLIENT_SECRET`
    /// - `ZOHO_REFRESH_TOKEN`
    ///
    /// # Optional Environment Variables
    ///
    /// - `ZOHO_ACCOUNTS_URL`, `ZOHO_TOKEN_SLUG`, `ZOHO_DESK_API_URL`
    /// - `ZOHO_REDIRECT_URI`, `ZOHO_SCOPE`, `ZOHO_GRANT_TYPE`
    /// - `ZOHO_ORG_ID`
    /// - `ZOHO_TIMEOUT_SECS`
    ///
    /// # Errors
    ///
    /// Returns `DeskError::Config` if a required variable is missing or a
    /// value fails validation.
    pub fn from_env() -> Result<Self, DeskError> {
        let mut config = Config::new(
            Self::get_required_env("ZOHO_CLIENT_ID")?,
            Self::get_required_env("ZOHO_CLIENT_SECRET")?,
            Self::get_required_env("ZOHO_REFRESH_TOKEN")?,
        );

        if let Some(url) = Self::get_optional_env("ZOHO_ACCOUNTS_URL") {
            config.accounts_url = url;
        }
        if let Some(slug) = Self::get_optional_env("ZOHO_TOKEN_SLUG") {
            config.token_slug = slug;
        }
        if let Some(url) = Self::get_optional_env("ZOHO_DESK_API_URL") {
            config.api_url = url;
        }
        if let Some(uri) = Self::get_optional_env("ZOHO_REDIRECT_URI") {
            config.redirect_uri = uri;
        }
        if let Some(scope) = Self::get_optional_env("ZOHO_SCOPE") {
            config.scope = scope;
        }
        if let Some(grant_type) = Self::get_optional_env("ZOHO_GRANT_TYPE") {
            config.grant_type = grant_type;
        }
        config.org_id = Self::get_optional_env("ZOHO_ORG_ID");
        if let Some(secs) = Self::get_optional_env("ZOHO_TIMEOUT_SECS") {
            config.timeout = Self::parse_timeout(&secs)?;
        }

        config.validate()
    }

    /// Loads a `.env` file if present, then reads the environment.
    pub fn from_dotenv() -> Result<Self, DeskError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Validates and normalizes the configuration.
    ///
    /// Base URLs must be absolute http(s) URLs and lose any trailing slash.
    /// The token slug always starts with `/`.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::Config` on the first invalid value.
    pub fn validate(mut self) -> Result<Self, DeskError> {
        self.accounts_url = Self::validate_base_url("accounts_url", &self.accounts_url)?;
        self.api_url = Self::validate_base_url("api_url", &self.api_url)?;

        let slug = self.token_slug.trim();
        self.token_slug = if slug.starts_with('/') {
            slug.to_string()
        } else {
            format!("/{}", slug)
        };

        if self.client_id.trim().is_empty() {
            return Err(DeskError::invalid_config("client_id must not be empty"));
        }
        Self::validate_secret("client_secret", &self.client_secret)?;
        Self::validate_secret("refresh_token", &self.refresh_token)?;

        if self.timeout.is_zero() {
            return Err(DeskError::invalid_config("timeout must be greater than zero"));
        }

        Ok(self)
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, DeskError> {
        Self::get_optional_env(name).ok_or_else(|| DeskError::missing_env(name))
    }

    /// Gets an environment variable, treating blank values as unset.
    fn get_optional_env(name: &str) -> Option<String> {
        env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn parse_timeout(secs: &str) -> Result<Duration, DeskError> {
        secs.parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| DeskError::invalid_config("ZOHO_TIMEOUT_SECS must be a whole number of seconds"))
    }

    /// Validates and normalizes a base URL.
    fn validate_base_url(field: &str, url: &str) -> Result<String, DeskError> {
        let url = url.trim().trim_end_matches('/');

        let parsed = Url::parse(url)
            .map_err(|e| DeskError::invalid_config(format!("{} is not a valid URL: {}", field, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(DeskError::invalid_config(format!(
                "{} must start with http:// or https://",
                field
            )));
        }

        Ok(url.to_string())
    }

    /// Rejects empty or placeholder secrets.
    fn validate_secret(field: &str, value: &str) -> Result<(), DeskError> {
        if value.trim().is_empty() {
            return Err(DeskError::invalid_config(format!("{} must not be empty", field)));
        }

        let lower = value.to_lowercase();
        let placeholder_patterns = ["your_", "placeholder", "xxx", "changeme"];
        if placeholder_patterns.iter().any(|p| lower.contains(p)) {
            return Err(DeskError::invalid_config(format!(
                "{} appears to be a placeholder value",
                field
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("accounts_url", &self.accounts_url)
            .field("token_slug", &self.token_slug)
            .field("api_url", &self.api_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_uri", &self.redirect_uri)
            .field("scope", &self.scope)
            .field("grant_type", &self.grant_type)
            .field("refresh_token", &"[REDACTED]")
            .field("org_id", &self.org_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment-reading paths are not unit tested; tests that modify
    // environment variables would race with each other.

    fn sample() -> Config {
        Config::new("1000.ABC", "secret123", "1000.refresh")
    }

    #[test]
    fn test_new_uses_default_endpoints() {
        let config = sample();
        assert_eq!(config.accounts_url, DEFAULT_ACCOUNTS_URL);
        assert_eq!(config.token_slug, DEFAULT_TOKEN_SLUG);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.grant_type, "refresh_token");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.org_id.is_none());
    }

    #[test]
    fn test_validate_base_url_removes_trailing_slash() {
        let result = Config::validate_base_url("api_url", "https://example.com/api/v1/").unwrap();
        assert_eq!(result, "https://example.com/api/v1");
    }

    #[test]
    fn test_validate_base_url_requires_scheme() {
        assert!(Config::validate_base_url("api_url", "example.com").is_err());
        assert!(Config::validate_base_url("api_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_prefixes_token_slug() {
        let config = sample().with_token_slug("oauth/v2/token").validate().unwrap();
        assert_eq!(config.token_slug, "/oauth/v2/token");
    }

    #[test]
    fn test_validate_rejects_placeholder_secret() {
        let err = Config::new("id", "your_client_secret", "1000.refresh")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("client_secret"));
    }

    #[test]
    fn test_validate_rejects_empty_refresh_token() {
        let err = Config::new("id", "secret123", "  ").validate().unwrap_err();
        assert!(err.to_string().contains("refresh_token"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let result = sample().with_timeout(Duration::ZERO).validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(Config::parse_timeout("15").unwrap(), Duration::from_secs(15));
        assert!(Config::parse_timeout("soon").is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let debug = format!("{:?}", sample());
        assert!(!debug.contains("secret123"));
        assert!(!debug.contains("1000.refresh"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("1000.ABC"));
    }
}
