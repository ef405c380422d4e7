//! Authentication collaborator interface
//!
//! The guard, the login flow and [`AuthenticatedClient`](crate::client::AuthenticatedClient)
//! never own session state. They consult an [`AuthProvider`] passed to them
//! explicitly, which holds the current [`SessionToken`] and knows how to bring
//! a session up and down.

use std::sync::Arc;

use miette::Diagnostic;

use crate::session::SessionStoreError;

mod jwt;
mod token_auth;

pub use jwt::{Claims, Jwt};
pub use token_auth::{DEFAULT_SESSION_KEY, TokenAuth};

/// Errors raised by an authentication collaborator.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum AuthError {
    /// No usable session token is held
    #[error("not authenticated")]
    #[diagnostic(
        code(booknet::auth::not_authenticated),
        help("sign in with the identity provider to obtain a fresh token")
    )]
    NotAuthenticated,

    /// Session persistence failed
    #[error("session store error")]
    #[diagnostic(code(booknet::auth::store))]
    Store(#[from] #[diagnostic_source] SessionStoreError),

    /// The held token could not be read
    #[error("invalid session token")]
    #[diagnostic(code(booknet::auth::token))]
    Token(#[from] #[diagnostic_source] TokenError),

    /// Any other collaborator failure
    #[error("{0}")]
    #[diagnostic(code(booknet::auth::other))]
    Other(String),
}

/// Errors raised while inspecting a session token.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum TokenError {
    /// Not three dot-separated segments
    #[error("malformed JWT: {0}")]
    #[diagnostic(code(booknet::token::malformed))]
    Malformed(&'static str),

    /// Payload segment is not base64url
    #[error("base64 decode error: {0}")]
    #[diagnostic(code(booknet::token::base64))]
    Base64(#[from] base64::DecodeError),

    /// Payload is not a JSON claims object
    #[error("invalid claims: {0}")]
    #[diagnostic(code(booknet::token::claims))]
    Claims(#[from] serde_json::Error),

    /// Payload carries no usable `exp` claim
    #[error("token has no expiry")]
    #[diagnostic(code(booknet::token::missing_expiry))]
    MissingExpiry,

    /// `exp` claim, or `exp` shifted by the validity window, is not a representable instant
    #[error("token expiry out of range")]
    #[diagnostic(code(booknet::token::expiry_out_of_range))]
    ExpiryOutOfRange,
}

/// A session token the collaborator can expose to consumers.
pub trait SessionToken {
    /// Whether the token is past its expiry.
    ///
    /// An `Err` means the expiry could not be determined.
    fn is_token_expired(&self) -> Result<bool, TokenError>;

    /// Raw token text, as sent in a bearer `Authorization` header.
    fn as_str(&self) -> &str;
}

/// Authentication collaborator owning the session.
#[cfg_attr(not(target_arch = "wasm32"), trait_variant::make(Send))]
pub trait AuthProvider {
    /// Token type exposed to consumers
    type Token: SessionToken;

    /// Prepare the collaborator, restoring any persisted session.
    async fn init(&self) -> Result<(), AuthError>;

    /// Establish an authenticated session.
    async fn login(&self) -> Result<(), AuthError>;

    /// End the session and forget its token.
    async fn logout(&self) -> Result<(), AuthError>;

    /// Current token, if one is held.
    fn token(&self) -> Option<Self::Token>;
}

impl<T: AuthProvider + Send + Sync> AuthProvider for Arc<T> {
    type Token = T::Token;

    async fn init(&self) -> Result<(), AuthError> {
        self.as_ref().init().await
    }

    async fn login(&self) -> Result<(), AuthError> {
        self.as_ref().login().await
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.as_ref().logout().await
    }

    fn token(&self) -> Option<Self::Token> {
        self.as_ref().token()
    }
}
