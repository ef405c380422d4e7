use std::collections::VecDeque;
use std::sync::Arc;

use booknet::api::book::{
    borrow_book::BorrowBookParams, find_all_borrowed_books::FindAllBorrowedBooksParams,
    find_book_by_id::FindBookByIdParams,
    upload_book_cover_picture::UploadBookCoverPictureParams,
};
use booknet::api::feedback::{
    find_all_feedbacks_by_book::FindAllFeedbacksByBookParams, savefeedback::SavefeedbackParams,
};
use booknet::api::models::{FeedbackRequest, FeedbackResponse, PageResponse};
use booknet::client::ApiConfiguration;
use booknet::error::{ClientError, DecodeError, TransportError};
use booknet::http_client::HttpClient;
use booknet::rest::{CallOptions, RestRequest};
use booknet::services::{BookService, FeedbackService};
use booknet::AuthorizationToken;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{Method, Response as HttpResponse, StatusCode};
use tokio::sync::Mutex;

#[derive(Clone, Default)]
struct MockClient {
    // Queue of HTTP responses to pop for each send_http call
    queue: Arc<Mutex<VecDeque<HttpResponse<Vec<u8>>>>>,
    // Capture requests for assertions
    log: Arc<Mutex<Vec<http::Request<Vec<u8>>>>>,
}

impl MockClient {
    async fn push(&self, resp: HttpResponse<Vec<u8>>) {
        self.queue.lock().await.push_back(resp);
    }
    async fn take_log(&self) -> Vec<http::Request<Vec<u8>>> {
        let mut log = self.log.lock().await;
        let out = log.clone();
        log.clear();
        out
    }
}

impl HttpClient for MockClient {
    type Error = std::convert::Infallible;

    fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> impl core::future::Future<
        Output = core::result::Result<http::Response<Vec<u8>>, Self::Error>,
    > + Send {
        let log = self.log.clone();
        let queue = self.queue.clone();
        async move {
            log.lock().await.push(request);
            Ok(queue.lock().await.pop_front().expect("no queued response"))
        }
    }
}

/// Client whose every send fails before any response arrives.
#[derive(Clone, Copy)]
struct UnreachableClient;

impl HttpClient for UnreachableClient {
    type Error = TransportError;

    fn send_http(
        &self,
        _request: http::Request<Vec<u8>>,
    ) -> impl core::future::Future<
        Output = core::result::Result<http::Response<Vec<u8>>, Self::Error>,
    > + Send {
        async { Err(TransportError::Connect("connection refused".into())) }
    }
}

fn json_response(status: StatusCode, body: serde_json::Value) -> HttpResponse<Vec<u8>> {
    HttpResponse::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .header("x-request-id", "abc")
        .body(serde_json::to_vec(&body).unwrap())
        .unwrap()
}

fn feedback_service(client: MockClient) -> FeedbackService<MockClient> {
    FeedbackService::new(
        ApiConfiguration::parse("http://localhost:8088/api/v1/").unwrap(),
        client,
    )
}

fn feedback_params() -> SavefeedbackParams {
    SavefeedbackParams::new()
        .body(
            FeedbackRequest::new()
                .book_id(42)
                .note(4.0)
                .review("Great read")
                .build(),
        )
        .build()
}

#[test]
fn published_paths_match_operations() {
    assert_eq!(FeedbackService::<MockClient>::SAVEFEEDBACK_PATH, "/feedbacks");
    assert_eq!(
        FeedbackService::<MockClient>::FIND_ALL_FEEDBACKS_BY_BOOK_PATH,
        FindAllFeedbacksByBookParams::PATH
    );
    assert_eq!(
        BookService::<MockClient>::APPROVE_RETURN_BORROW_BOOK_PATH,
        "/books/borrow/return/approve/{book-id}"
    );
}

#[tokio::test]
async fn savefeedback_returns_new_id() {
    let client = MockClient::default();
    client.push(json_response(StatusCode::OK, serde_json::json!(17))).await;
    let service = feedback_service(client.clone());

    let id = service.savefeedback(&feedback_params(), None).await.unwrap();
    assert_eq!(id, 17);

    let log = client.take_log().await;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].method(), Method::POST);
    assert_eq!(log[0].uri(), "http://localhost:8088/api/v1/feedbacks");
    let sent: serde_json::Value = serde_json::from_slice(log[0].body()).unwrap();
    assert_eq!(
        sent,
        serde_json::json!({ "bookId": 42, "note": 4.0, "review": "Great read" })
    );
}

#[tokio::test]
async fn string_encoded_id_is_accepted() {
    let client = MockClient::default();
    client.push(json_response(StatusCode::OK, serde_json::json!("17"))).await;
    let service = feedback_service(client);

    assert_eq!(service.savefeedback(&feedback_params(), None).await.unwrap(), 17);
}

#[tokio::test]
async fn non_numeric_id_is_a_decode_error() {
    let client = MockClient::default();
    client
        .push(json_response(StatusCode::OK, serde_json::json!({ "id": 17 })))
        .await;
    let service = feedback_service(client);

    let err = service.savefeedback(&feedback_params(), None).await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(DecodeError::NotNumeric(_))));
}

#[tokio::test]
async fn body_variant_matches_envelope_body() {
    let page = serde_json::json!({
        "content": [
            { "note": 4.5, "review": "Loved it", "ownFeedback": true },
            { "note": 2.0, "review": "Meh", "ownFeedback": false }
        ],
        "number": 0,
        "size": 2,
        "totalElements": 3,
        "totalPages": 2,
        "first": true,
        "last": false
    });
    let client = MockClient::default();
    client.push(json_response(StatusCode::OK, page.clone())).await;
    client.push(json_response(StatusCode::OK, page.clone())).await;
    let service = feedback_service(client.clone());
    let params = FindAllFeedbacksByBookParams::new()
        .book_id(42)
        .page(0)
        .size(2)
        .build();

    let envelope = service
        .find_all_feedbacks_by_book_response(&params, None)
        .await
        .unwrap();
    assert_eq!(envelope.status(), StatusCode::OK);
    assert_eq!(envelope.headers()["x-request-id"], "abc");

    let body = service
        .find_all_feedbacks_by_book(&params, None)
        .await
        .unwrap();
    assert_eq!(&body, envelope.body());
    assert_eq!(body.content.len(), 2);
    assert_eq!(
        body.content[0],
        FeedbackResponse {
            note: Some(4.5),
            review: Some("Loved it".into()),
            own_feedback: Some(true),
        }
    );
    assert_eq!(serde_json::to_value(&body).unwrap(), page);

    let log = client.take_log().await;
    assert_eq!(log.len(), 2);
    for req in &log {
        assert_eq!(req.method(), Method::GET);
        assert_eq!(
            req.uri(),
            "http://localhost:8088/api/v1/feedbacks/book/42?page=0&size=2"
        );
    }
}

#[tokio::test]
async fn empty_page_passes_through() {
    let client = MockClient::default();
    client
        .push(json_response(
            StatusCode::OK,
            serde_json::json!({ "content": [] }),
        ))
        .await;
    let service = feedback_service(client);

    let page = service
        .find_all_feedbacks_by_book(&FindAllFeedbacksByBookParams::new().book_id(1).build(), None)
        .await
        .unwrap();
    assert_eq!(page, PageResponse::default());
}

#[tokio::test]
async fn error_status_fails_both_variants_alike() {
    let problem = serde_json::json!({ "businessErrorDescription": "No book found" });
    let client = MockClient::default();
    client
        .push(json_response(StatusCode::NOT_FOUND, problem.clone()))
        .await;
    client
        .push(json_response(StatusCode::NOT_FOUND, problem.clone()))
        .await;
    let service = feedback_service(client.clone());
    let params = FindAllFeedbacksByBookParams::new().book_id(999).build();

    let full = service
        .find_all_feedbacks_by_book_response(&params, None)
        .await
        .unwrap_err();
    let body = service
        .find_all_feedbacks_by_book(&params, None)
        .await
        .unwrap_err();

    for err in [full, body] {
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        match err {
            ClientError::Http(e) => {
                let raw = e.body.expect("error body kept");
                assert_eq!(
                    serde_json::from_slice::<serde_json::Value>(&raw).unwrap(),
                    problem
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
    assert_eq!(client.take_log().await.len(), 2);
}

#[tokio::test]
async fn transport_failure_fails_both_variants_alike() {
    let service = FeedbackService::new(
        ApiConfiguration::parse("http://localhost:8088/api/v1/").unwrap(),
        UnreachableClient,
    );
    let params = FindAllFeedbacksByBookParams::new().book_id(42).build();

    let full = service
        .find_all_feedbacks_by_book_response(&params, None)
        .await
        .unwrap_err();
    let body = service
        .find_all_feedbacks_by_book(&params, None)
        .await
        .unwrap_err();

    for err in [full, body] {
        assert_eq!(err.status(), None);
        assert!(
            matches!(err, ClientError::Transport(TransportError::Connect(_))),
            "unexpected error: {err:?}"
        );
    }
}

#[tokio::test]
async fn call_options_carry_bearer_and_headers() {
    let client = MockClient::default();
    client
        .push(json_response(
            StatusCode::OK,
            serde_json::json!({ "id": 7, "title": "Dune", "shareable": true }),
        ))
        .await;
    let service = BookService::new(ApiConfiguration::default(), client.clone());
    let opts = CallOptions {
        auth: Some(AuthorizationToken::Bearer("tok".into())),
        extra_headers: vec![(
            http::HeaderName::from_static("accept-language"),
            http::HeaderValue::from_static("fr"),
        )],
    };

    let book = service
        .find_book_by_id(&FindBookByIdParams::new().book_id(7).build(), Some(opts))
        .await
        .unwrap();
    assert_eq!(book.id, 7);
    assert_eq!(book.title.as_deref(), Some("Dune"));

    let log = client.take_log().await;
    assert_eq!(log[0].uri(), "http://localhost:8088/api/v1/books/7");
    assert_eq!(log[0].headers()[AUTHORIZATION], "Bearer tok");
    assert_eq!(log[0].headers()["accept-language"], "fr");
}

#[tokio::test]
async fn book_workflow_ids_and_pages() {
    let client = MockClient::default();
    client.push(json_response(StatusCode::OK, serde_json::json!(5))).await;
    client
        .push(json_response(
            StatusCode::OK,
            serde_json::json!({
                "content": [{ "id": 7, "title": "Dune", "returned": false, "returnApproved": false }],
                "number": 0,
                "totalElements": 1
            }),
        ))
        .await;
    let service = BookService::new(ApiConfiguration::default(), client.clone());

    let history = service
        .borrow_book(&BorrowBookParams::new().book_id(7).build(), None)
        .await
        .unwrap();
    assert_eq!(history, 5);

    let borrowed = service
        .find_all_borrowed_books_response(&FindAllBorrowedBooksParams::default(), None)
        .await
        .unwrap();
    let (status, _, page) = borrowed.into_parts();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page.total_elements, Some(1));
    assert_eq!(page.content[0].returned, Some(false));

    let log = client.take_log().await;
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].method(), Method::POST);
    assert_eq!(log[0].uri(), "http://localhost:8088/api/v1/books/borrow/7");
    assert_eq!(log[1].uri(), "http://localhost:8088/api/v1/books/borrowed");
}

#[tokio::test]
async fn cover_upload_accepts_empty_reply() {
    let client = MockClient::default();
    client
        .push(
            HttpResponse::builder()
                .status(StatusCode::ACCEPTED)
                .body(Vec::new())
                .unwrap(),
        )
        .await;
    let service = BookService::new(ApiConfiguration::default(), client.clone());
    let params = UploadBookCoverPictureParams::new()
        .book_id(7)
        .file_name("dune.png")
        .content_type("image/png")
        .data(b"PNG".to_vec())
        .build();

    service.upload_book_cover_picture(&params, None).await.unwrap();

    let log = client.take_log().await;
    assert_eq!(log[0].method(), Method::POST);
    assert_eq!(log[0].uri(), "http://localhost:8088/api/v1/books/cover/7");
    assert!(
        log[0].headers()[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("multipart/form-data; boundary=")
    );
    assert_eq!(
        BookService::<MockClient>::UPLOAD_BOOK_COVER_PICTURE_PATH,
        "/books/cover/{book-id}"
    );
}
