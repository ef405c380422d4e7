use booknet_common::error::EncodeError;
use booknet_common::rest::{JsonResponse, RequestBuilder, RestMethod, RestRequest};

use crate::Pagination;
use crate::models::{FeedbackResponse, PageResponse};

/// Parameters for `GET /feedbacks/book/{book-id}`
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct FindAllFeedbacksByBookParams {
    #[serde(rename = "book-id")]
    pub book_id: i64,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub page: std::option::Option<i32>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub size: std::option::Option<i32>,
}

impl RestRequest for FindAllFeedbacksByBookParams {
    const PATH: &'static str = "/feedbacks/book/{book-id}";
    const METHOD: RestMethod = RestMethod::Get;

    type Response = JsonResponse<PageResponse<FeedbackResponse>>;

    fn build(&self, rb: RequestBuilder) -> Result<RequestBuilder, EncodeError> {
        rb.path("book-id", self.book_id).query_params(&Pagination {
            page: self.page,
            size: self.size,
        })
    }
}
