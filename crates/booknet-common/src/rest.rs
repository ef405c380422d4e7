//! # Stateless REST utilities and request/response mapping
//!
//! Mapping overview:
//! - Request: the operation's path template gets its `{placeholders}`
//!   substituted, query pairs appended, and (for body-carrying methods) the
//!   encoded body attached with its declared content type.
//! - Success (2xx): decode the body into the operation's typed output and wrap
//!   it with status and headers in a [`Response`].
//! - Anything else: surface `ClientError::Http` with the raw body. No retry,
//!   no recovery.

use std::fmt::{self, Debug, Display};
use std::marker::PhantomData;

use bytes::Bytes;
use http::{
    HeaderMap, HeaderName, HeaderValue, Request, StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::AuthorizationToken;
use crate::error::{ClientResult, DecodeError, EncodeError, HttpError, TransportError};
use crate::multipart::Form;
use crate::http_client::HttpClient;

/// Characters escaped when a value is substituted into a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// JSON media type, used by every operation except file uploads.
pub const APPLICATION_JSON: &str = "application/json";

/// Multipart media type, used for file uploads.
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// HTTP method of a REST operation, carrying the body encoding where one is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestMethod {
    /// GET, no body
    Get,
    /// DELETE, no body
    Delete,
    /// POST with a body of the given content type
    Post(&'static str),
    /// PUT with a body of the given content type
    Put(&'static str),
    /// PATCH with a body of the given content type
    Patch(&'static str),
}

impl RestMethod {
    /// Get the HTTP method string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Delete => "DELETE",
            Self::Post(_) => "POST",
            Self::Put(_) => "PUT",
            Self::Patch(_) => "PATCH",
        }
    }

    /// Get the body encoding type for this method (body-carrying methods only)
    pub const fn body_encoding(&self) -> Option<&'static str> {
        match self {
            Self::Get | Self::Delete => None,
            Self::Post(enc) | Self::Put(enc) | Self::Patch(enc) => Some(enc),
        }
    }

    fn to_http(self) -> http::Method {
        match self {
            Self::Get => http::Method::GET,
            Self::Delete => http::Method::DELETE,
            Self::Post(_) => http::Method::POST,
            Self::Put(_) => http::Method::PUT,
            Self::Patch(_) => http::Method::PATCH,
        }
    }
}

/// Trait for REST request parameter objects
///
/// Implemented on the per-operation parameter struct. Carries the published
/// path template, the method, and the marker for the response side.
pub trait RestRequest {
    /// Path template relative to the API root, e.g. `/feedbacks/book/{book-id}`
    const PATH: &'static str;

    /// HTTP method (and body encoding, if any)
    const METHOD: RestMethod;

    /// Response type returned from the call (marker struct)
    type Response: RestResp;

    /// Fill in path parameters, query parameters and body.
    ///
    /// The default sends nothing beyond the bare template.
    fn build(&self, rb: RequestBuilder) -> Result<RequestBuilder, EncodeError> {
        Ok(rb)
    }
}

/// Trait for REST response marker types
pub trait RestResp {
    /// Accepted response encoding (MIME type)
    const ENCODING: &'static str;

    /// Decoded response body type
    type Output: DeserializeOwned;

    /// Decode the response body.
    ///
    /// Default implementation deserializes from JSON.
    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// Decode a JSON scalar holding a numeric identifier.
///
/// Accepts a JSON integer, an integral float, or a string containing one
/// (`17`, `17.0`, `"17"`). Anything else is a [`DecodeError::NotNumeric`].
pub fn decode_numeric_id(body: &[u8]) -> Result<i64, DecodeError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    let parsed = match &value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| integral(n.as_f64()?)),
        serde_json::Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| integral(s.parse::<f64>().ok()?))
        }
        _ => None,
    };
    parsed.ok_or_else(|| DecodeError::NotNumeric(value.to_string()))
}

fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
}

/// Response marker for operations answering with a bare numeric identifier.
pub struct IdResponse;

impl RestResp for IdResponse {
    const ENCODING: &'static str = APPLICATION_JSON;
    type Output = i64;

    fn decode_output(body: &[u8]) -> Result<i64, DecodeError> {
        decode_numeric_id(body)
    }
}

/// Response marker for operations answering with a JSON document of type `T`.
pub struct JsonResponse<T>(PhantomData<fn() -> T>);

impl<T: DeserializeOwned> RestResp for JsonResponse<T> {
    const ENCODING: &'static str = APPLICATION_JSON;
    type Output = T;
}

/// Response marker for operations whose success carries no meaningful body.
///
/// Whatever the server sends back is ignored once the status is 2xx.
pub struct EmptyResponse;

impl RestResp for EmptyResponse {
    const ENCODING: &'static str = APPLICATION_JSON;
    type Output = ();

    fn decode_output(_body: &[u8]) -> Result<(), DecodeError> {
        Ok(())
    }
}

/// Builds one transport-ready request from a root URL, a path template and a method.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    root: Url,
    template: &'static str,
    method: RestMethod,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(String, String)>,
    body: Option<(Vec<u8>, String)>,
}

impl RequestBuilder {
    /// Start a request for `template` under `root`.
    pub fn new(root: &Url, template: &'static str, method: RestMethod) -> Self {
        Self {
            root: root.clone(),
            template,
            method,
            path_params: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Set the value substituted for `{name}` in the path template.
    pub fn path(mut self, name: &'static str, value: impl Display) -> Self {
        self.path_params.push((name, value.to_string()));
        self
    }

    /// Append every field of `params` as query pairs.
    ///
    /// Fields skipped by serde (e.g. `None` with `skip_serializing_if`) add nothing.
    pub fn query_params<T: Serialize + ?Sized>(mut self, params: &T) -> Result<Self, EncodeError> {
        let qs = serde_html_form::to_string(params)?;
        self.query.extend(url::form_urlencoded::parse(qs.as_bytes()).into_owned());
        Ok(self)
    }

    /// Attach a raw body with its content type.
    pub fn body(mut self, body: Vec<u8>, content_type: impl Into<String>) -> Self {
        self.body = Some((body, content_type.into()));
        self
    }

    /// Attach `value` as a JSON body, using the method's declared encoding.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, EncodeError> {
        let content_type = self.method.body_encoding().unwrap_or(APPLICATION_JSON);
        let body = serde_json::to_vec(value)?;
        Ok(self.body(body, content_type))
    }

    /// Attach `form` as a `multipart/form-data` body.
    pub fn multipart(self, form: &Form) -> Self {
        let (body, content_type) = form.encode();
        self.body(body, content_type)
    }

    fn render_path(&self) -> Result<String, TransportError> {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template;
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after.find('}').ok_or_else(|| {
                TransportError::InvalidRequest(format!(
                    "unterminated placeholder in `{}`",
                    self.template
                ))
            })?;
            let name = &after[..end];
            let value = self
                .path_params
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v)
                .ok_or_else(|| {
                    TransportError::InvalidRequest(format!("missing path parameter `{name}`"))
                })?;
            out.extend(utf8_percent_encode(value, PATH_SEGMENT));
            rest = &after[end + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }

    /// Produce the final request, declaring `accept` as the expected response type.
    pub fn build(
        self,
        accept: &str,
        opts: &CallOptions,
    ) -> Result<Request<Vec<u8>>, TransportError> {
        let mut url = self.root.clone();
        let mut path = url.path().trim_end_matches('/').to_owned();
        path.push_str(&self.render_path()?);
        url.set_path(&path);

        if self.query.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(&self.query);
        }

        let mut builder = Request::builder()
            .method(self.method.to_http())
            .uri(url.as_str())
            .header(ACCEPT, accept);

        if let Some(token) = &opts.auth {
            let hv = HeaderValue::from_str(&token.header_value()).map_err(|e| {
                TransportError::InvalidRequest(format!("Invalid authorization token: {}", e))
            })?;
            builder = builder.header(AUTHORIZATION, hv);
        }
        for (name, value) in &opts.extra_headers {
            builder = builder.header(name, value);
        }

        let body = match self.body {
            Some((body, content_type)) => {
                builder = builder.header(CONTENT_TYPE, content_type);
                body
            }
            None => Vec::new(),
        };

        builder
            .body(body)
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))
    }
}

/// Per-request options for REST calls.
#[derive(Debug, Default, Clone)]
pub struct CallOptions {
    /// Optional Authorization to apply.
    pub auth: Option<AuthorizationToken>,
    /// Extra headers to attach to this request.
    pub extra_headers: Vec<(HeaderName, HeaderValue)>,
}

/// Build an HTTP request for a REST call given the API root and options
pub fn build_http_request<R>(
    base: &Url,
    req: &R,
    opts: &CallOptions,
) -> ClientResult<Request<Vec<u8>>>
where
    R: RestRequest,
{
    let rb = req.build(RequestBuilder::new(base, R::PATH, R::METHOD))?;
    Ok(rb.build(<R::Response as RestResp>::ENCODING, opts)?)
}

/// Process the HTTP response from the server into a typed envelope statelessly.
///
/// Exposed to make things more easily pluggable
#[inline]
pub fn process_response<Resp>(http_response: http::Response<Vec<u8>>) -> ClientResult<Response<Resp>>
where
    Resp: RestResp,
{
    let (parts, body) = http_response.into_parts();
    if !parts.status.is_success() {
        return Err(HttpError {
            status: parts.status,
            body: Some(Bytes::from(body)),
        }
        .into());
    }

    let output = Resp::decode_output(&body)?;
    Ok(Response::new(parts.status, parts.headers, output))
}

/// Keep a transport's own [`TransportError`] as is, box anything else.
fn into_transport_error<E>(e: E) -> TransportError
where
    E: std::error::Error + Send + Sync + 'static,
{
    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(e);
    match boxed.downcast::<TransportError>() {
        Ok(e) => *e,
        Err(other) => TransportError::Other(other),
    }
}

/// Extension for stateless REST calls on any `HttpClient`.
///
/// Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use booknet_common::rest::RestExt;
///
/// let http = reqwest::Client::new();
/// let base = url::Url::parse("http://localhost:8088/api/v1")?;
/// // let resp = http.rest(base).send(&params).await?;
/// # Ok(())
/// # }
/// ```
pub trait RestExt: HttpClient {
    /// Start building a REST call for the given API root.
    fn rest<'a>(&'a self, base: Url) -> RestCall<'a, Self>
    where
        Self: Sized,
    {
        RestCall {
            client: self,
            base,
            opts: CallOptions::default(),
        }
    }
}

impl<T: HttpClient> RestExt for T {}

/// Stateless REST call builder.
///
/// Example (per-request overrides)
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use booknet_common::rest::RestExt;
/// use booknet_common::AuthorizationToken;
///
/// let http = reqwest::Client::new();
/// let base = url::Url::parse("http://localhost:8088/api/v1")?;
/// let call = http
///     .rest(base)
///     .auth(AuthorizationToken::Bearer("ACCESS_TOKEN".into()))
///     .header(http::header::USER_AGENT, http::HeaderValue::from_static("booknet-example"));
/// // let resp = call.send(&params).await?;
/// # Ok(())
/// # }
/// ```
pub struct RestCall<'a, C: HttpClient> {
    pub(crate) client: &'a C,
    pub(crate) base: Url,
    pub(crate) opts: CallOptions,
}

impl<'a, C: HttpClient> RestCall<'a, C> {
    /// Apply Authorization to this call.
    pub fn auth(mut self, token: AuthorizationToken) -> Self {
        self.opts.auth = Some(token);
        self
    }
    /// Add an extra header.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.opts.extra_headers.push((name, value));
        self
    }
    /// Replace the builder's options entirely.
    pub fn with_options(mut self, opts: CallOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Send the given typed request and return the decoded envelope.
    ///
    /// Issues exactly one HTTP request. Dropping the returned future before it
    /// resolves abandons the result; nothing is retried and no timeout applies.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self, request), fields(method = R::METHOD.as_str(), path = R::PATH)))]
    pub async fn send<R>(self, request: &R) -> ClientResult<Response<R::Response>>
    where
        R: RestRequest,
    {
        let http_request = build_http_request(&self.base, request, &self.opts)?;

        let http_response = self
            .client
            .send_http(http_request)
            .await
            .map_err(into_transport_error)?;

        process_response(http_response)
    }
}

/// Envelope type produced by sending request `R`.
pub type RestResponse<R> = Response<<R as RestRequest>::Response>;

/// Typed response envelope
///
/// Only built from a successful transport response; the body has already been
/// decoded to the operation's output type.
pub struct Response<R>
where
    R: RestResp,
{
    status: StatusCode,
    headers: HeaderMap,
    body: R::Output,
}

impl<R> Response<R>
where
    R: RestResp,
{
    /// Create a new envelope from a status, headers and decoded body
    pub fn new(status: StatusCode, headers: HeaderMap, body: R::Output) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Borrow the decoded body
    pub fn body(&self) -> &R::Output {
        &self.body
    }

    /// Take the decoded body, discarding status and headers
    pub fn into_body(self) -> R::Output {
        self.body
    }

    /// Split into status, headers and body
    pub fn into_parts(self) -> (StatusCode, HeaderMap, R::Output) {
        (self.status, self.headers, self.body)
    }
}

impl<R> Debug for Response<R>
where
    R: RestResp,
    R::Output: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("body", &self.body)
            .finish()
    }
}

impl<R> Clone for Response<R>
where
    R: RestResp,
    R::Output: Clone,
{
    fn clone(&self) -> Self {
        Self {
            status: self.status,
            headers: self.headers.clone(),
            body: self.body.clone(),
        }
    }
}
