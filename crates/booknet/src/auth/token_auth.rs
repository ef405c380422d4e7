use std::sync::{Arc, RwLock};

use super::{AuthError, AuthProvider, Jwt, SessionToken};
use crate::session::SessionStore;

/// Store key used when none is given.
pub const DEFAULT_SESSION_KEY: &str = "booknet-session";

/// In-process collaborator holding a token handed over by an external identity provider.
///
/// The token is mirrored into a [`SessionStore`] so a later [`init`](AuthProvider::init)
/// can restore it.
pub struct TokenAuth<S> {
    store: Arc<S>,
    key: String,
    token: RwLock<Option<Jwt>>,
}

impl<S> TokenAuth<S>
where
    S: SessionStore<String, Jwt>,
{
    /// Collaborator persisting under [`DEFAULT_SESSION_KEY`].
    pub fn new(store: Arc<S>) -> Self {
        Self::with_key(store, DEFAULT_SESSION_KEY)
    }

    /// Collaborator persisting under `key`.
    pub fn with_key(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            token: RwLock::new(None),
        }
    }

    /// Accept a freshly issued token: persist it, then hold it.
    pub async fn set_token(&self, token: Jwt) -> Result<(), AuthError> {
        self.store.set(self.key.clone(), token.clone()).await?;
        self.replace(Some(token))
    }

    fn replace(&self, token: Option<Jwt>) -> Result<(), AuthError> {
        let mut slot = self
            .token
            .write()
            .map_err(|_| AuthError::Other("session token lock poisoned".into()))?;
        *slot = token;
        Ok(())
    }
}

impl<S> AuthProvider for TokenAuth<S>
where
    S: SessionStore<String, Jwt>,
{
    type Token = Jwt;

    async fn init(&self) -> Result<(), AuthError> {
        let restored = self.store.get(&self.key).await;
        if restored.is_some() {
            self.replace(restored)?;
        }
        Ok(())
    }

    async fn login(&self) -> Result<(), AuthError> {
        let token = self.token().ok_or(AuthError::NotAuthenticated)?;
        if token.is_token_expired()? {
            return Err(AuthError::NotAuthenticated);
        }
        Ok(())
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.replace(None)?;
        self.store.del(&self.key).await?;
        Ok(())
    }

    fn token(&self) -> Option<Jwt> {
        self.token.read().ok()?.clone()
    }
}
