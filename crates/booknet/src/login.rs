//! Login flow
//!
//! Hands control to the authentication collaborator: initialize it, then ask
//! it to establish a session. Whatever the collaborator reports is returned
//! unchanged.

use crate::auth::{AuthError, AuthProvider};

/// Drives an [`AuthProvider`] through initialization and login.
pub struct LoginFlow;

impl LoginFlow {
    /// Await `auth.init()`, then `auth.login()`.
    ///
    /// The first failure is returned as is and `login` is not attempted after
    /// a failed `init`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    pub async fn run<A: AuthProvider>(auth: &A) -> Result<(), AuthError> {
        auth.init().await?;
        auth.login().await
    }
}
