#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the Rahla back-office API.
//!
//! The remote API wraps every payload in the same envelope
//! (`{ code, data, message, totalItems?, totalPages? }`). The types here model
//! that envelope plus every entity the back office manages, so the UI never
//! hand-parses JSON.

pub mod entities;
mod envelope;
mod resource;
mod text;

pub use entities::*;
pub use envelope::{ApiMessage, Envelope, Page, SUCCESS_CODE};
pub use resource::{Payload, Resource};
pub use text::Translations;

use serde::{Deserialize, Serialize};

/// Credentials posted to `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Plain-text password (sent over TLS only).
    pub password: String,
}

/// Successful login payload carried in the envelope `data`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Bearer token attached to subsequent requests.
    pub token: String,
    /// Role string granted to the account.
    #[serde(default)]
    pub role: String,
}
