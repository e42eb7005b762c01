//! # zdesk
//!
//! zdesk is an async client for the Zoho Desk REST API.
//!
//! Each operation is a single request/response round trip: build the URL,
//! headers and body, send, decode the JSON into a typed model.
//!
//! ## Features
//!
//! - **OAuth**: exchange a refresh token for an access token
//! - **Lookups**: organization id, departments, agents (with email search)
//! - **Tickets**: update status, reassign, move between departments, get details
//! - **Error handling**: transport failures and API-level failures are distinct errors
//! - **Security**: secrets are never logged and are redacted from error bodies
//!
//! There is no retry, no rate-limit handling and no token caching. The caller
//! owns the access token and decides when to renew it.
//!
//! ## Architecture
//!
//! - [`config`] - Credentials and endpoints, built in code or loaded from the environment
//! - [`error`] - The `DeskError` type
//! - [`desk_client`] - The HTTP client and its operations
//! - [`models`] - Request bodies and response models
//!
//! ## Configuration
//!
//! [`Config::from_env`](config::Config::from_env) requires:
//!
//! - `ZOHO_CLIENT_ID`
//! - `ZOHO_CLIENT_SECRET`
//! - `ZOHO_REFRESH_TOKEN`
//!
//! Optional: `ZOHO_ACCOUNTS_URL`, `ZOHO_TOKEN_SLUG`, `ZOHO_DESK_API_URL`,
//! `ZOHO_REDIRECT_URI`, `ZOHO_SCOPE`, `ZOHO_GRANT_TYPE`, `ZOHO_ORG_ID`,
//! `ZOHO_TIMEOUT_SECS`.
//!
//! ## Logging
//!
//! The crate emits `tracing` events; install any subscriber to see them.
//!
//! ## Example
//!
//! ```ignore
//! use zdesk::{Config, DeskClient, TicketMutationRequest};
//!
//! async fn example() -> Result<(), zdesk::DeskError> {
//!     let config = Config::from_dotenv()?;
//!     let client = DeskClient::new(&config)?;
//!
//!     let token = client.access_token().await?;
//!     let org_id = client.organization_id(&token).await?;
//!
//!     let request = TicketMutationRequest::new("123456")
//!         .with_assignee("7000001")
//!         .with_department("5000001");
//!     let result = client.reassign_ticket(&token, &org_id, &request).await?;
//!     println!("ticket {:?} is now {:?}", result.ticket_number, result.status);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod desk_client;
pub mod error;
pub mod models;

pub use config::Config;
pub use desk_client::{AgentQuery, DeskClient};
pub use error::DeskError;
pub use models::{TicketDetail, TicketMutationRequest, TicketMutationResult};
