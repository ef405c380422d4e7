use booknet_common::error::EncodeError;
use booknet_common::rest::{JsonResponse, RequestBuilder, RestMethod, RestRequest};

use crate::Pagination;
use crate::models::{BookResponse, PageResponse};

/// Parameters for `GET /books/owner`
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct FindAllBooksByOwnerParams {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub page: std::option::Option<i32>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub size: std::option::Option<i32>,
}

impl RestRequest for FindAllBooksByOwnerParams {
    const PATH: &'static str = "/books/owner";
    const METHOD: RestMethod = RestMethod::Get;

    type Response = JsonResponse<PageResponse<BookResponse>>;

    fn build(&self, rb: RequestBuilder) -> Result<RequestBuilder, EncodeError> {
        rb.query_params(&Pagination {
            page: self.page,
            size: self.size,
        })
    }
}
