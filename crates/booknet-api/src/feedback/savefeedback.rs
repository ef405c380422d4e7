use booknet_common::error::EncodeError;
use booknet_common::rest::{APPLICATION_JSON, IdResponse, RequestBuilder, RestMethod, RestRequest};

use crate::models::FeedbackRequest;

/// Parameters for `POST /feedbacks`
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, bon::Builder)]
#[builder(start_fn = new)]
pub struct SavefeedbackParams {
    pub body: FeedbackRequest,
}

impl RestRequest for SavefeedbackParams {
    const PATH: &'static str = "/feedbacks";
    const METHOD: RestMethod = RestMethod::Post(APPLICATION_JSON);

    /// The server answers with the new feedback's identifier as a JSON scalar.
    type Response = IdResponse;

    fn build(&self, rb: RequestBuilder) -> Result<RequestBuilder, EncodeError> {
        rb.json(&self.body)
    }
}
