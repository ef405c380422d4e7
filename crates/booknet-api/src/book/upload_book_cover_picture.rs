use booknet_common::error::EncodeError;
use booknet_common::multipart::{Form, Part};
use booknet_common::rest::{EmptyResponse, MULTIPART_FORM_DATA, RequestBuilder, RestMethod, RestRequest};

/// Parameters for `POST /books/cover/{book-id}`
///
/// Replaces the cover picture of a book, sent as the multipart part `file`.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new, on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct UploadBookCoverPictureParams {
    #[serde(rename = "book-id")]
    pub book_id: i64,
    pub file_name: String,
    /// Media type of the picture, e.g. `image/png`
    pub content_type: String,
    pub data: Vec<u8>,
}

impl RestRequest for UploadBookCoverPictureParams {
    const PATH: &'static str = "/books/cover/{book-id}";
    const METHOD: RestMethod = RestMethod::Post(MULTIPART_FORM_DATA);

    /// The server acknowledges without a body.
    type Response = EmptyResponse;

    fn build(&self, rb: RequestBuilder) -> Result<RequestBuilder, EncodeError> {
        let form = Form::new().part(Part::file(
            "file",
            &self.file_name,
            &self.content_type,
            self.data.clone(),
        ));
        Ok(rb.path("book-id", self.book_id).multipart(&form))
    }
}
