use booknet_common::error::EncodeError;
use booknet_common::rest::{APPLICATION_JSON, IdResponse, RequestBuilder, RestMethod, RestRequest};

use crate::models::BookRequest;

/// Parameters for `POST /books`
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct SaveBookParams {
    pub body: BookRequest,
}

impl RestRequest for SaveBookParams {
    const PATH: &'static str = "/books";
    const METHOD: RestMethod = RestMethod::Post(APPLICATION_JSON);

    type Response = IdResponse;

    fn build(&self, rb: RequestBuilder) -> Result<RequestBuilder, EncodeError> {
        rb.json(&self.body)
    }
}
