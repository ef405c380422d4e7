use booknet_common::error::EncodeError;
use booknet_common::rest::{APPLICATION_JSON, IdResponse, RequestBuilder, RestMethod, RestRequest};

/// Parameters for `PATCH /books/archived/{book-id}`
///
/// Toggles the archived flag of a book owned by the connected user.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct UpdateArchivedStatusParams {
    #[serde(rename = "book-id")]
    pub book_id: i64,
}

impl RestRequest for UpdateArchivedStatusParams {
    const PATH: &'static str = "/books/archived/{book-id}";
    const METHOD: RestMethod = RestMethod::Patch(APPLICATION_JSON);

    type Response = IdResponse;

    fn build(&self, rb: RequestBuilder) -> Result<RequestBuilder, EncodeError> {
        Ok(rb.path("book-id", self.book_id))
    }
}
