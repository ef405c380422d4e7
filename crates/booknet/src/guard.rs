//! Navigation-time session guard
//!
//! Before a protected route activates, the guard asks the authentication
//! collaborator for its token. Anything short of a token known to be live
//! sends the user to [`LOGIN_PATH`].

use std::sync::Arc;

use crate::auth::{AuthProvider, SessionToken};

/// Route users are sent to when their session is not usable.
pub const LOGIN_PATH: &str = "/login";

/// Navigation collaborator.
pub trait Router {
    /// Navigate to `path`.
    fn navigate(&self, path: &str);
}

impl<T: Router + ?Sized> Router for Arc<T> {
    fn navigate(&self, path: &str) {
        self.as_ref().navigate(path)
    }
}

impl<T: Router + ?Sized> Router for &T {
    fn navigate(&self, path: &str) {
        (**self).navigate(path)
    }
}

/// Route guard admitting only holders of an unexpired session token.
#[derive(Debug, Clone)]
pub struct AuthGuard<A, R> {
    auth: A,
    router: R,
}

impl<A: AuthProvider, R: Router> AuthGuard<A, R> {
    /// Guard consulting `auth` and redirecting through `router`.
    pub fn new(auth: A, router: R) -> Self {
        Self { auth, router }
    }

    /// Decide whether navigation to `target` may proceed.
    ///
    /// A missing token, an expired one, or one whose expiry cannot be read all
    /// deny: the router is sent to [`LOGIN_PATH`] exactly once and `false` is
    /// returned. A live token returns `true` with no side effect.
    pub fn can_activate(&self, target: &str) -> bool {
        let expired = match self.auth.token() {
            Some(token) => token.is_token_expired().unwrap_or(true),
            None => true,
        };
        if !expired {
            return true;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(route = target, "session not usable, redirecting to login");
        #[cfg(not(feature = "tracing"))]
        let _ = target;

        self.router.navigate(LOGIN_PATH);
        false
    }
}
