//! Data models for the Zoho Desk API.
//!
//! Every response type implements `Default` and tolerates missing fields, so
//! an empty response body decodes to a zero-valued struct.

mod agent;
mod auth;
mod common;
mod department;
mod organization;
mod ticket;

pub use agent::*;
pub use auth::*;
pub use common::*;
pub use department::*;
pub use organization::*;
pub use ticket::*;
