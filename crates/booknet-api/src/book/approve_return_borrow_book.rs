use booknet_common::error::EncodeError;
use booknet_common::rest::{APPLICATION_JSON, IdResponse, RequestBuilder, RestMethod, RestRequest};

/// Parameters for `PATCH /books/borrow/return/approve/{book-id}`
///
/// Owner-side approval of a returned book.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct ApproveReturnBorrowBookParams {
    #[serde(rename = "book-id")]
    pub book_id: i64,
}

impl RestRequest for ApproveReturnBorrowBookParams {
    const PATH: &'static str = "/books/borrow/return/approve/{book-id}";
    const METHOD: RestMethod = RestMethod::Patch(APPLICATION_JSON);

    type Response = IdResponse;

    fn build(&self, rb: RequestBuilder) -> Result<RequestBuilder, EncodeError> {
        Ok(rb.path("book-id", self.book_id))
    }
}
