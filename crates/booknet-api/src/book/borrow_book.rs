use booknet_common::error::EncodeError;
use booknet_common::rest::{APPLICATION_JSON, IdResponse, RequestBuilder, RestMethod, RestRequest};

/// Parameters for `POST /books/borrow/{book-id}`
///
/// Records a borrow of someone else's shareable book; answers with the history entry id.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct BorrowBookParams {
    #[serde(rename = "book-id")]
    pub book_id: i64,
}

impl RestRequest for BorrowBookParams {
    const PATH: &'static str = "/books/borrow/{book-id}";
    const METHOD: RestMethod = RestMethod::Post(APPLICATION_JSON);

    type Response = IdResponse;

    fn build(&self, rb: RequestBuilder) -> Result<RequestBuilder, EncodeError> {
        Ok(rb.path("book-id", self.book_id))
    }
}
