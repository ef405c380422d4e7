//! Common types for the booknet client
//!
//! Transport abstraction, request building, and response envelopes shared by
//! the generated API bindings and the service layer.

#![warn(missing_docs)]
pub use url;

pub mod error;
/// HTTP client abstraction used by booknet crates.
pub mod http_client;
pub mod multipart;
/// Typed REST request building and response processing.
pub mod rest;
/// Generic session storage traits and utilities.
pub mod session;

/// Authorization token types for REST requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationToken {
    /// Bearer token (OIDC access token)
    Bearer(String),
}

impl AuthorizationToken {
    /// Render the `Authorization` header value for this token.
    pub fn header_value(&self) -> String {
        match self {
            AuthorizationToken::Bearer(t) => format!("Bearer {t}"),
        }
    }
}
