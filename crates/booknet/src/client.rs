use http::HeaderValue;
use http::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use std::future::Future;
use url::Url;

use crate::auth::{AuthProvider, SessionToken};
use crate::http_client::HttpClient;
use crate::rest::{CallOptions, RestCall, RestExt};

/// Root URL the backend serves its API under by default.
pub const DEFAULT_ROOT_URL: &str = "http://localhost:8088/api/v1";

/// Process-wide API settings, read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfiguration {
    /// Root every operation path is appended to
    pub root_url: Url,
}

impl ApiConfiguration {
    /// Configuration for the API served under `root_url`.
    pub fn new(root_url: Url) -> Self {
        Self { root_url }
    }

    /// Parse `root_url` and build a configuration from it.
    pub fn parse(root_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(root_url)?))
    }
}

impl Default for ApiConfiguration {
    fn default() -> Self {
        Self::parse(DEFAULT_ROOT_URL).expect("default root URL is valid")
    }
}

/// Shared state of every service façade: configuration plus transport.
#[derive(Debug, Clone)]
pub struct BaseService<C> {
    config: ApiConfiguration,
    http: C,
}

impl<C: HttpClient> BaseService<C> {
    /// Create a base service.
    pub fn new(config: ApiConfiguration, http: C) -> Self {
        Self { config, http }
    }

    /// Root URL operations are sent under.
    pub fn root_url(&self) -> &Url {
        &self.config.root_url
    }

    /// Underlying transport.
    pub fn http(&self) -> &C {
        &self.http
    }

    /// Start one call against the configured root with the given per-call options.
    pub fn call(&self, opts: Option<CallOptions>) -> RestCall<'_, C> {
        self.http
            .rest(self.config.root_url.clone())
            .with_options(opts.unwrap_or_default())
    }
}

/// Transport wrapper that attaches the collaborator's session token as a bearer token
///
/// Requests that already carry an `Authorization` header are left untouched.
/// When the collaborator exposes no token the request goes out anonymous and
/// the server decides.
pub struct AuthenticatedClient<C, A> {
    client: C,
    auth: A,
}

impl<C, A> AuthenticatedClient<C, A> {
    /// Wrap `client` so that requests carry `auth`'s token.
    pub fn new(client: C, auth: A) -> Self {
        Self { client, auth }
    }

    /// Get the authentication collaborator.
    pub fn auth(&self) -> &A {
        &self.auth
    }
}

impl<C, A> HttpClient for AuthenticatedClient<C, A>
where
    C: HttpClient,
    A: AuthProvider,
{
    type Error = C::Error;

    fn send_http(
        &self,
        mut request: http::Request<Vec<u8>>,
    ) -> impl Future<Output = core::result::Result<http::Response<Vec<u8>>, Self::Error>> {
        if !request.headers().contains_key(AUTHORIZATION) {
            let bearer = self
                .auth
                .token()
                .and_then(|t| HeaderValue::from_str(&format!("Bearer {}", t.as_str())).ok());
            if let Some(hv) = bearer {
                request.headers_mut().insert(AUTHORIZATION, hv);
            }
        }
        self.client.send_http(request)
    }
}
