//! Minimal `multipart/form-data` encoding for file uploads.
//!
//! Bodies are built in memory so they fit the `http::Request<Vec<u8>>` shape
//! every [`HttpClient`](crate::http_client::HttpClient) sends.

use crate::rest::MULTIPART_FORM_DATA;

/// One named part of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    name: String,
    file_name: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

impl Part {
    /// Plain field part.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_name: None,
            content_type: None,
            data: value.into().into_bytes(),
        }
    }

    /// File part with its file name and media type.
    pub fn file(
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            file_name: Some(file_name.into()),
            content_type: Some(content_type.into()),
            data,
        }
    }

    /// Field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw content
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Ordered set of parts sent as one `multipart/form-data` body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    parts: Vec<Part>,
}

impl Form {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part.
    pub fn part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// Parts in send order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Encode the form, returning the body and its `Content-Type` header value.
    ///
    /// The boundary never occurs inside any part's content.
    pub fn encode(&self) -> (Vec<u8>, String) {
        let boundary = self.boundary();
        let mut body = Vec::new();
        for part in &self.parts {
            body.extend_from_slice(b"--");
            body.extend_from_slice(boundary.as_bytes());
            body.extend_from_slice(b"\r\nContent-Disposition: form-data; name=\"");
            body.extend_from_slice(quote(&part.name).as_bytes());
            body.push(b'"');
            if let Some(file_name) = &part.file_name {
                body.extend_from_slice(b"; filename=\"");
                body.extend_from_slice(quote(file_name).as_bytes());
                body.push(b'"');
            }
            body.extend_from_slice(b"\r\n");
            if let Some(content_type) = &part.content_type {
                body.extend_from_slice(b"Content-Type: ");
                body.extend_from_slice(content_type.as_bytes());
                body.extend_from_slice(b"\r\n");
            }
            body.extend_from_slice(b"\r\n");
            body.extend_from_slice(&part.data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(b"--");
        body.extend_from_slice(boundary.as_bytes());
        body.extend_from_slice(b"--\r\n");

        (body, format!("{MULTIPART_FORM_DATA}; boundary={boundary}"))
    }

    fn boundary(&self) -> String {
        (0u64..)
            .map(|n| format!("booknet-form-boundary-{n:08x}"))
            .find(|candidate| {
                !self
                    .parts
                    .iter()
                    .any(|p| contains(&p.data, candidate.as_bytes()))
            })
            .unwrap_or_default()
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

// Disposition parameters escape quotes and line breaks the way browsers do.
fn quote(value: &str) -> String {
    value
        .replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
