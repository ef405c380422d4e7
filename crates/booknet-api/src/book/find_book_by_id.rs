use booknet_common::error::EncodeError;
use booknet_common::rest::{JsonResponse, RequestBuilder, RestMethod, RestRequest};

use crate::models::BookResponse;

/// Parameters for `GET /books/{book-id}`
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct FindBookByIdParams {
    #[serde(rename = "book-id")]
    pub book_id: i64,
}

impl RestRequest for FindBookByIdParams {
    const PATH: &'static str = "/books/{book-id}";
    const METHOD: RestMethod = RestMethod::Get;

    type Response = JsonResponse<BookResponse>;

    fn build(&self, rb: RequestBuilder) -> Result<RequestBuilder, EncodeError> {
        Ok(rb.path("book-id", self.book_id))
    }
}
