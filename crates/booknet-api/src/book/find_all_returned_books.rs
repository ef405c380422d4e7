use booknet_common::error::EncodeError;
use booknet_common::rest::{JsonResponse, RequestBuilder, RestMethod, RestRequest};

use crate::Pagination;
use crate::models::{BorrowedBookResponse, PageResponse};

/// Parameters for `GET /books/returned`
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct FindAllReturnedBooksParams {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub page: std::option::Option<i32>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub size: std::option::Option<i32>,
}

impl RestRequest for FindAllReturnedBooksParams {
    const PATH: &'static str = "/books/returned";
    const METHOD: RestMethod = RestMethod::Get;

    type Response = JsonResponse<PageResponse<BorrowedBookResponse>>;

    fn build(&self, rb: RequestBuilder) -> Result<RequestBuilder, EncodeError> {
        rb.query_params(&Pagination {
            page: self.page,
            size: self.size,
        })
    }
}
