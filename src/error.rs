//! Error types for the Zoho Desk client.
//!
//! This module defines `DeskError`, the unified error type returned by every
//! client operation.
//!
//! Two failure layers are kept apart:
//!
//! - **Transport/decode** failures: the request could not be sent, timed out,
//!   came back with a non-2xx status and no readable error body, or carried
//!   malformed JSON.
//! - **API** failures: the service answered with a well-formed body whose
//!   `message` (or OAuth `error`) field is populated. These surface as
//!   [`DeskError::Api`] even when the HTTP status was 2xx.
//!
//! # Security
//!
//! Error bodies returned by the service are sanitized before they are stored
//! in an error value. Use `sanitize_message()` when building messages from
//! external text.

use std::time::Duration;
use thiserror::Error;

/// Unified error type for all Zoho Desk operations.
#[derive(Error, Debug)]
pub enum DeskError {
    /// Configuration error - missing or invalid settings.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP response returned a non-success status code without an error message.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The (sanitized, truncated) response body.
        body: String,
    },

    /// Request timed out.
    #[error("request timed out after {duration:?} during {operation}")]
    Timeout {
        /// The configured timeout.
        duration: Duration,
        /// The operation that timed out.
        operation: String,
    },

    /// Response body was not valid JSON for the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service reported a logical failure in the response body.
    #[error("Zoho Desk API error{}: {message}", code_suffix(.code))]
    Api {
        /// HTTP status, when the error arrived on a non-2xx response.
        status: Option<reqwest::StatusCode>,
        /// Service error code (e.g. `INVALID_DATA`), if present.
        code: Option<String>,
        /// Human-readable message from the service.
        message: String,
    },

    /// The response contained no data for the requested resource.
    #[error("{resource} not found")]
    NotFound {
        /// What was looked up.
        resource: String,
    },

    /// Input validation failed before any request was sent.
    #[error("validation error: {0}")]
    Validation(String),
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref().map(|c| format!(" {}", c)).unwrap_or_default()
}

impl DeskError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        DeskError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        DeskError::Config(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        DeskError::Validation(message.into())
    }

    /// Creates a not found error.
    pub fn not_found(resource: impl Into<String>) -> Self {
        DeskError::NotFound {
            resource: resource.into(),
        }
    }

    /// Creates a timeout error.
    pub fn timeout(duration: Duration, operation: impl Into<String>) -> Self {
        DeskError::Timeout {
            duration,
            operation: operation.into(),
        }
    }

    /// Creates an API error from a message embedded in a response body.
    pub fn api(
        status: Option<reqwest::StatusCode>,
        code: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        DeskError::Api {
            status,
            code,
            message: message.into(),
        }
    }

    /// Returns true if the failure happened below the API layer: the exchange
    /// itself failed or its body could not be read.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DeskError::Http(_)
                | DeskError::HttpClient(_)
                | DeskError::HttpStatus { .. }
                | DeskError::Timeout { .. }
                | DeskError::Decode(_)
        )
    }

    /// Returns the service-provided message for API-level failures.
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            DeskError::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Replaces every occurrence of each secret in `message` with `[REDACTED]`.
    ///
    /// Empty secrets are ignored.
    #[must_use]
    pub fn sanitize_message(message: &str, secrets: &[&str]) -> String {
        secrets
            .iter()
            .filter(|s| !s.is_empty())
            .fold(message.to_string(), |acc, secret| {
                acc.replace(secret, "[REDACTED]")
            })
    }
}
