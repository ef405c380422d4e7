//! Request and response bodies exchanged with the API.

/// Feedback submission for a book
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, bon::Builder)]
#[builder(start_fn = new, on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub book_id: i64,
    /// Rating, 0 to 5
    pub note: f64,
    pub review: String,
}

/// A feedback entry as listed for a book
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub note: std::option::Option<f64>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub review: std::option::Option<String>,
    /// Whether the connected user wrote this feedback
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub own_feedback: std::option::Option<bool>,
}

/// One page of a server-side paginated listing
///
/// Metadata fields are optional so a page re-serializes exactly as received.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    #[serde(default)]
    pub content: Vec<T>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub number: std::option::Option<i32>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub size: std::option::Option<i32>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub total_elements: std::option::Option<i64>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub total_pages: std::option::Option<i32>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub first: std::option::Option<bool>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last: std::option::Option<bool>,
}

impl<T> Default for PageResponse<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            number: None,
            size: None,
            total_elements: None,
            total_pages: None,
            first: None,
            last: None,
        }
    }
}

/// Book creation or update payload
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new, on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    /// Present when updating an existing book
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<i64>,
    pub title: String,
    pub author_name: String,
    pub isbn: String,
    pub synopsis: String,
    #[builder(default)]
    pub shareable: bool,
}

/// A book as returned by the catalogue endpoints
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: i64,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub title: std::option::Option<String>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub author_name: std::option::Option<String>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub isbn: std::option::Option<String>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub synopsis: std::option::Option<String>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub owner: std::option::Option<String>,
    /// Cover picture, base64 encoded by the server
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cover: std::option::Option<String>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rate: std::option::Option<f64>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub archived: std::option::Option<bool>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub shareable: std::option::Option<bool>,
}

/// A book seen through the borrowing history of the connected user
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BorrowedBookResponse {
    pub id: i64,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub title: std::option::Option<String>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub author_name: std::option::Option<String>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub isbn: std::option::Option<String>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rate: std::option::Option<f64>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub returned: std::option::Option<bool>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_approved: std::option::Option<bool>,
}
