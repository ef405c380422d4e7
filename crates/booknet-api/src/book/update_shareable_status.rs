use booknet_common::error::EncodeError;
use booknet_common::rest::{APPLICATION_JSON, IdResponse, RequestBuilder, RestMethod, RestRequest};

/// Parameters for `PATCH /books/shareable/{book-id}`
///
/// Toggles the shareable flag of a book owned by the connected user.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct UpdateShareableStatusParams {
    #[serde(rename = "book-id")]
    pub book_id: i64,
}

impl RestRequest for UpdateShareableStatusParams {
    const PATH: &'static str = "/books/shareable/{book-id}";
    const METHOD: RestMethod = RestMethod::Patch(APPLICATION_JSON);

    type Response = IdResponse;

    fn build(&self, rb: RequestBuilder) -> Result<RequestBuilder, EncodeError> {
        Ok(rb.path("book-id", self.book_id))
    }
}
