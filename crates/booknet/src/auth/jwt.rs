use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{SessionToken, TokenError};

/// Compact-serialized JWT issued by the identity provider.
///
/// Only the payload is inspected. The signature is the server's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Jwt(String);

/// Claims read from a token payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Claims {
    /// Expiration, seconds since the epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Display login of the subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,
}

impl Jwt {
    /// Wrap raw token text.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Decode the payload claims without verifying the signature.
    pub fn claims(&self) -> Result<Claims, TokenError> {
        let mut parts = self.0.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::Malformed(
                "JWT must have exactly 3 parts separated by dots",
            ));
        };
        let payload = URL_SAFE_NO_PAD.decode(payload)?;
        Ok(serde_json::from_slice(&payload)?)
    }

    /// Instant the token stops being valid.
    pub fn expires_at(&self) -> Result<DateTime<Utc>, TokenError> {
        let exp = self.claims()?.exp.ok_or(TokenError::MissingExpiry)?;
        DateTime::from_timestamp(exp, 0).ok_or(TokenError::ExpiryOutOfRange)
    }

    /// Whether the token expires within `min_validity` from now.
    pub fn is_token_expired_within(&self, min_validity: Duration) -> Result<bool, TokenError> {
        self.is_expired_at(Utc::now(), min_validity)
    }

    /// Whether the token, checked at `now`, has less than `min_validity` left.
    pub fn is_expired_at(
        &self,
        now: DateTime<Utc>,
        min_validity: Duration,
    ) -> Result<bool, TokenError> {
        let deadline = self
            .expires_at()?
            .checked_sub_signed(min_validity)
            .ok_or(TokenError::ExpiryOutOfRange)?;
        Ok(deadline < now)
    }
}

impl SessionToken for Jwt {
    fn is_token_expired(&self) -> Result<bool, TokenError> {
        self.is_token_expired_within(Duration::zero())
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Jwt {
    fn from(token: String) -> Self {
        Self(token)
    }
}
