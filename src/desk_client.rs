//! HTTP client for the Zoho Desk API.
//!
//! This module provides the `DeskClient` struct. Every public method issues
//! exactly one HTTP request and decodes the response into a typed model.
//! There is no retry, no token caching and no background work: access tokens
//! are exchanged on request and passed back in by the caller.
//!
//! # Errors
//!
//! Transport and decode failures and API-level failures are reported as
//! distinct [`DeskError`] variants. A 2xx response whose body carries a
//! `message` field is an API failure, not a success.
//!
//! # Security
//!
//! Access tokens, the client secret and the refresh token are never logged.
//! Error bodies are sanitized before they are stored in an error.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::DeskError;
use crate::models::{
    decode_body, AccessToken, Agent, AgentList, ApiErrorBody, Department, DepartmentList,
    MoveTicketBody, OrganizationList, TicketDetail, TicketMutationRequest, TicketMutationResult,
    TicketPatch,
};

/// Authorization scheme prefix for Desk calls.
const AUTH_SCHEME: &str = "Zoho-oauthtoken";

/// Content type sent on reads and on the token exchange.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Page size requested when listing departments.
const DEPARTMENT_PAGE_SIZE: u32 = 100;

/// Related resources embedded in ticket detail responses.
const TICKET_DETAIL_INCLUDE: &str = "assignee,departments";

/// Maximum length for HTTP error response bodies kept in errors.
const MAX_ERROR_BODY_LEN: usize = 500;

/// HTTP client for the Zoho Desk API.
///
/// Cloning is cheap; clones share the underlying connection pool.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = DeskClient::new(&config)?;
///
/// let token = client.access_token().await?;
/// let org_id = client.organization_id(&token).await?;
/// let ticket = client.ticket_detail(&token, &org_id, "123456").await?;
/// ```
#[derive(Clone)]
pub struct DeskClient {
    /// The underlying HTTP client.
    http: Client,

    /// Validated configuration.
    /// SECURITY: holds the client secret and refresh token.
    config: Config,
}

impl DeskClient {
    /// Creates a client with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::Config` if the configuration is invalid, or
    /// `DeskError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, DeskError> {
        let http = Client::builder()
            .user_agent(concat!("zdesk/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(DeskError::HttpClient)?;

        Self::with_http_client(http, config)
    }

    /// Creates a client on top of a caller-owned `reqwest::Client`.
    ///
    /// The configured timeout is applied to every request regardless of the
    /// injected client's own settings.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::Config` if the configuration is invalid.
    pub fn with_http_client(http: Client, config: &Config) -> Result<Self, DeskError> {
        let config = config.clone().validate()?;
        Ok(Self { http, config })
    }

    /// Returns the organization id supplied in configuration, if any.
    pub fn configured_org_id(&self) -> Option<&str> {
        self.config.org_id.as_deref()
    }

    /// Validates that an ID is a numeric string, as Desk ids are.
    ///
    /// This keeps malformed ids from altering the request path.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::Validation` if the ID is empty or contains non-digit characters.
    fn validate_id(id: &str, field_name: &str) -> Result<(), DeskError> {
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DeskError::validation(format!(
                "{} must be a numeric string, got: {:?}",
                field_name,
                id.chars().take(50).collect::<String>()
            )));
        }
        Ok(())
    }

    // ========================================================================
    // OAuth
    // ========================================================================

    /// Exchanges the configured refresh token for an access token.
    ///
    /// Sends a form-encoded POST to `<accounts_url><token_slug>`. The returned
    /// token is not stored.
    ///
    /// `scope` and `redirect_uri` are sent only when configured; the refresh
    /// grant accepts a form without them.
    ///
    /// # Errors
    ///
    /// - `DeskError::Http` / `DeskError::Timeout` if the request cannot be sent
    /// - `DeskError::Decode` if the body is not a token response
    /// - `DeskError::Api` if the accounts server rejected the refresh token
    pub async fn exchange_token(&self) -> Result<AccessToken, DeskError> {
        let url = format!("{}{}", self.config.accounts_url, self.config.token_slug);

        let mut form = vec![
            ("refresh_token", self.config.refresh_token()),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret()),
        ];
        if !self.config.scope.is_empty() {
            form.push(("scope", self.config.scope.as_str()));
        }
        if !self.config.redirect_uri.is_empty() {
            form.push(("redirect_uri", self.config.redirect_uri.as_str()));
        }
        form.push(("grant_type", self.config.grant_type.as_str()));

        let request = self
            .http
            .post(&url)
            .timeout(self.config.timeout)
            .form(&form);

        let token: AccessToken = self.send("token exchange", request, None).await?;

        tracing::debug!(
            token_type = %token.token_type,
            expires_in = token.expires_in,
            "Access token obtained"
        );
        Ok(token)
    }

    /// Exchanges the refresh token and returns only the access token string.
    pub async fn access_token(&self) -> Result<String, DeskError> {
        Ok(self.exchange_token().await?.access_token)
    }

    // ========================================================================
    // Organization, departments and agents
    // ========================================================================

    /// Returns the id of the first organization visible to the token.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::Api` if the response carries an error message, and
    /// `DeskError::NotFound` if it lists no organizations.
    pub async fn organization_id(&self, token: &str) -> Result<String, DeskError> {
        let request = self.authorized(Method::GET, "/organizations", token, None)?;

        let response: OrganizationList = self.send("GET /organizations", request, Some(token)).await?;

        response
            .first_id()
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .ok_or_else(|| DeskError::not_found("organization"))
    }

    /// Lists departments (up to one page of 100).
    pub async fn list_departments(&self, token: &str) -> Result<Vec<Department>, DeskError> {
        let request = self
            .authorized(Method::GET, "/departments", token, None)?
            .query(&[("limit", DEPARTMENT_PAGE_SIZE)]);

        let response: DepartmentList = self.send("GET /departments", request, Some(token)).await?;

        Ok(response.data)
    }

    /// Lists or searches agents.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let query = AgentQuery::new().with_email("jane@example.com");
    /// let agents = client.list_agents(&token, &query).await?;
    /// ```
    pub async fn list_agents(
        &self,
        token: &str,
        query: &AgentQuery,
    ) -> Result<Vec<Agent>, DeskError> {
        let mut request = self.authorized(Method::GET, "/agents", token, None)?;

        let pairs = query.to_query();
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }

        let response: AgentList = self.send("GET /agents", request, Some(token)).await?;

        Ok(response.data)
    }

    // ========================================================================
    // Tickets
    // ========================================================================

    /// Sets a ticket's status.
    ///
    /// Sends `PATCH /tickets/{id}` with a body containing only `status`.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::Api` if the response carries an error message,
    /// e.g. for an invalid status transition.
    pub async fn update_ticket_status(
        &self,
        token: &str,
        org_id: &str,
        ticket_id: &str,
        status: &str,
    ) -> Result<TicketMutationResult, DeskError> {
        Self::validate_id(ticket_id, "ticket_id")?;
        let status = status.trim();
        if status.is_empty() {
            return Err(DeskError::validation("status must not be empty"));
        }

        let path = format!("/tickets/{}", ticket_id);
        self.mutate(Method::PATCH, &path, token, org_id, &TicketPatch::status(status))
            .await
    }

    /// Reassigns a ticket to an agent and reopens it.
    ///
    /// Sends `PATCH /tickets/{id}` with `assigneeId`, `departmentId` (when
    /// set) and `"status": "Open"`. The request's own `status` is ignored:
    /// reassignment always reopens the ticket.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::Validation` if no assignee is set, and
    /// `DeskError::Api` if the response carries an error message.
    pub async fn reassign_ticket(
        &self,
        token: &str,
        org_id: &str,
        request: &TicketMutationRequest,
    ) -> Result<TicketMutationResult, DeskError> {
        Self::validate_id(&request.ticket_id, "ticket_id")?;
        let assignee_id = request
            .assignee_id
            .as_deref()
            .ok_or_else(|| DeskError::validation("assignee_id is required for reassignment"))?;
        Self::validate_id(assignee_id, "assignee_id")?;
        if let Some(department_id) = request.department_id.as_deref() {
            Self::validate_id(department_id, "department_id")?;
        }

        let path = format!("/tickets/{}", request.ticket_id);
        self.mutate(Method::PATCH, &path, token, org_id, &TicketPatch::reassign(request))
            .await
    }

    /// Moves a ticket to another department.
    ///
    /// Sends `POST /tickets/{id}/move` with only `departmentId`.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::Validation` if no department is set, and
    /// `DeskError::Api` if the response carries an error message.
    pub async fn move_ticket(
        &self,
        token: &str,
        org_id: &str,
        request: &TicketMutationRequest,
    ) -> Result<TicketMutationResult, DeskError> {
        Self::validate_id(&request.ticket_id, "ticket_id")?;
        let department_id = request
            .department_id
            .as_deref()
            .ok_or_else(|| DeskError::validation("department_id is required for a move"))?;
        Self::validate_id(department_id, "department_id")?;

        let body = MoveTicketBody {
            department_id: department_id.to_string(),
        };
        let path = format!("/tickets/{}/move", request.ticket_id);
        self.mutate(Method::POST, &path, token, org_id, &body).await
    }

    /// Gets a ticket with its assignee and department embedded.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::Api` if the response carries an error message.
    pub async fn ticket_detail(
        &self,
        token: &str,
        org_id: &str,
        ticket_id: &str,
    ) -> Result<TicketDetail, DeskError> {
        Self::validate_id(ticket_id, "ticket_id")?;
        let path = format!("/tickets/{}", ticket_id);

        let request = self
            .authorized(Method::GET, &path, token, Some(org_id))?
            .query(&[("include", TICKET_DETAIL_INCLUDE)]);

        self.send(&format!("GET {}", path), request, Some(token)).await
    }

    // ========================================================================
    // Private helpers
    // ========================================================================

    /// Sends a JSON mutation and checks the embedded error message.
    async fn mutate<B>(
        &self,
        method: Method,
        path: &str,
        token: &str,
        org_id: &str,
        body: &B,
    ) -> Result<TicketMutationResult, DeskError>
    where
        B: serde::Serialize,
    {
        let operation = format!("{} {}", method, path);
        let request = self
            .authorized(method, path, token, Some(org_id))?
            .json(body);

        self.send(&operation, request, Some(token)).await
    }

    /// Builds a request against the Desk API with auth headers.
    ///
    /// Reads carry a form-encoded `Content-Type`; `.json()` replaces it for
    /// mutations. `org_id` is sent as the `orgId` header when given.
    fn authorized(
        &self,
        method: Method,
        path: &str,
        token: &str,
        org_id: Option<&str>,
    ) -> Result<RequestBuilder, DeskError> {
        let url = format!("{}{}", self.config.api_url, path);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .timeout(self.config.timeout)
            .header("Authorization", format!("{} {}", AUTH_SCHEME, token));

        if method == Method::GET {
            request = request.header(CONTENT_TYPE, FORM_CONTENT_TYPE);
        }

        if let Some(org_id) = org_id {
            Self::validate_id(org_id, "org_id")?;
            request = request.header("orgId", org_id);
        }

        Ok(request)
    }

    /// Sends a request and decodes the body.
    ///
    /// An empty 2xx body decodes to `T::default()`. Any body carrying an error
    /// message is an API error, whatever the status. A non-2xx response
    /// without one is an HTTP status error.
    async fn send<T>(
        &self,
        operation: &str,
        request: RequestBuilder,
        token: Option<&str>,
    ) -> Result<T, DeskError>
    where
        T: DeserializeOwned + Default,
    {
        tracing::debug!(operation = %operation, "Sending Zoho Desk request");

        let response = request.send().await.map_err(|e| self.transport_error(e, operation))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e, operation))?;

        if !status.is_success() {
            let err = self.http_error(status, &body, token);
            tracing::warn!(operation = %operation, status = %status, error = %err, "Zoho Desk request failed");
            return Err(err);
        }

        tracing::trace!(operation = %operation, bytes = body.len(), "Zoho Desk response received");

        if let Some(err) = self.embedded_error(&body, None, token) {
            tracing::warn!(operation = %operation, status = %status, error = %err, "Zoho Desk request rejected");
            return Err(err);
        }

        decode_body(&body)
    }

    fn transport_error(&self, e: reqwest::Error, operation: &str) -> DeskError {
        if e.is_timeout() {
            return DeskError::timeout(self.config.timeout, operation);
        }
        DeskError::Http(e)
    }

    /// Redacts the client secret, refresh token and access token from `body`.
    fn sanitize(&self, body: &str, token: Option<&str>) -> String {
        DeskError::sanitize_message(
            body,
            &[
                self.config.client_secret(),
                self.config.refresh_token(),
                token.unwrap_or_default(),
            ],
        )
    }

    /// Returns the API error carried by a JSON error envelope, if any.
    ///
    /// The message is sanitized before it is stored in the error.
    fn embedded_error(
        &self,
        body: &str,
        status: Option<reqwest::StatusCode>,
        token: Option<&str>,
    ) -> Option<DeskError> {
        if body.trim().is_empty() {
            return None;
        }
        let envelope: ApiErrorBody = serde_json::from_str(body).ok()?;
        let message = self.sanitize(envelope.message()?, token);
        Some(DeskError::api(status, envelope.error_code, message))
    }

    /// Converts a non-2xx response into an error, sanitizing the body.
    fn http_error(&self, status: reqwest::StatusCode, body: &str, token: Option<&str>) -> DeskError {
        if let Some(err) = self.embedded_error(body, Some(status), token) {
            return err;
        }

        let body = self.sanitize(body, token);

        let body = if body.chars().count() > MAX_ERROR_BODY_LEN {
            format!(
                "{}...[truncated]",
                body.chars().take(MAX_ERROR_BODY_LEN).collect::<String>()
            )
        } else {
            body
        };

        DeskError::HttpStatus { status, body }
    }
}

/// Filters for agent listing.
///
/// Unset or blank values are left out of the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentQuery {
    /// Pagination start index.
    from: Option<u32>,

    /// Maximum number of agents to return.
    limit: Option<u32>,

    /// Email address to search for.
    email: Option<String>,
}

impl AgentQuery {
    /// Creates an empty query (all agents, server-default paging).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pagination start index.
    pub fn with_from(mut self, from: u32) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the maximum number of results.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Searches by email address. A blank address clears the filter.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        let email = email.into().trim().to_string();
        self.email = Some(email).filter(|e| !e.is_empty());
        self
    }

    /// Converts the query into ordered query-string pairs.
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(from) = self.from {
            pairs.push(("from", from.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(email) = &self.email {
            pairs.push(("fieldName", "emailId".to_string()));
            pairs.push(("searchStr", email.clone()));
        }
        pairs
    }
}
