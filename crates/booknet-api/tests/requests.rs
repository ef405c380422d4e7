use booknet_api::book::{
    approve_return_borrow_book::ApproveReturnBorrowBookParams, borrow_book::BorrowBookParams,
    find_all_books::FindAllBooksParams, find_all_books_by_owner::FindAllBooksByOwnerParams,
    find_all_borrowed_books::FindAllBorrowedBooksParams,
    find_all_returned_books::FindAllReturnedBooksParams, find_book_by_id::FindBookByIdParams,
    return_borrow_book::ReturnBorrowBookParams, save_book::SaveBookParams,
    update_archived_status::UpdateArchivedStatusParams,
    update_shareable_status::UpdateShareableStatusParams,
    upload_book_cover_picture::UploadBookCoverPictureParams,
};
use booknet_api::feedback::{
    find_all_feedbacks_by_book::FindAllFeedbacksByBookParams, savefeedback::SavefeedbackParams,
};
use booknet_api::models::{BookRequest, FeedbackRequest};
use booknet_common::rest::{CallOptions, RestRequest, build_http_request};
use http::Method;
use http::header::CONTENT_TYPE;
use url::Url;

fn root() -> Url {
    Url::parse("http://localhost:8088/api/v1").unwrap()
}

fn build<R: RestRequest>(req: &R) -> http::Request<Vec<u8>> {
    build_http_request(&root(), req, &CallOptions::default()).unwrap()
}

#[test]
fn savefeedback_posts_json_body() {
    let req = build(
        &SavefeedbackParams::new()
            .body(
                FeedbackRequest::new()
                    .book_id(3)
                    .note(4.5)
                    .review("Loved it")
                    .build(),
            )
            .build(),
    );

    assert_eq!(req.method(), Method::POST);
    assert_eq!(req.uri(), "http://localhost:8088/api/v1/feedbacks");
    assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
    let body: serde_json::Value = serde_json::from_slice(req.body()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "bookId": 3, "note": 4.5, "review": "Loved it" })
    );
}

#[test]
fn feedbacks_by_book_substitutes_id_and_pages() {
    let req = build(
        &FindAllFeedbacksByBookParams::new()
            .book_id(42)
            .page(1)
            .size(20)
            .build(),
    );
    assert_eq!(req.method(), Method::GET);
    assert_eq!(
        req.uri(),
        "http://localhost:8088/api/v1/feedbacks/book/42?page=1&size=20"
    );
    assert!(req.body().is_empty());
    assert!(req.headers().get(CONTENT_TYPE).is_none());

    let bare = build(&FindAllFeedbacksByBookParams::new().book_id(42).build());
    assert_eq!(bare.uri(), "http://localhost:8088/api/v1/feedbacks/book/42");
}

#[test]
fn page_size_alone_is_sent() {
    let req = build(&FindAllBooksParams::new().size(5).build());
    assert_eq!(req.uri(), "http://localhost:8088/api/v1/books?size=5");
}

#[test]
fn save_book_omits_absent_id() {
    let req = build(
        &SaveBookParams::new()
            .body(
                BookRequest::new()
                    .title("Dune")
                    .author_name("Frank Herbert")
                    .isbn("9780441013593")
                    .synopsis("Spice")
                    .shareable(true)
                    .build(),
            )
            .build(),
    );
    assert_eq!(req.method(), Method::POST);
    assert_eq!(req.uri(), "http://localhost:8088/api/v1/books");
    let body: serde_json::Value = serde_json::from_slice(req.body()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "title": "Dune",
            "authorName": "Frank Herbert",
            "isbn": "9780441013593",
            "synopsis": "Spice",
            "shareable": true
        })
    );
}

#[test]
fn book_operations_route_to_published_paths() {
    let cases: Vec<(http::Request<Vec<u8>>, Method, &str)> = vec![
        (
            build(&FindBookByIdParams::new().book_id(7).build()),
            Method::GET,
            "/books/7",
        ),
        (
            build(&FindAllBooksByOwnerParams::default()),
            Method::GET,
            "/books/owner",
        ),
        (
            build(&FindAllBorrowedBooksParams::new().page(0).build()),
            Method::GET,
            "/books/borrowed?page=0",
        ),
        (
            build(&FindAllReturnedBooksParams::default()),
            Method::GET,
            "/books/returned",
        ),
        (
            build(&UpdateShareableStatusParams::new().book_id(7).build()),
            Method::PATCH,
            "/books/shareable/7",
        ),
        (
            build(&UpdateArchivedStatusParams::new().book_id(7).build()),
            Method::PATCH,
            "/books/archived/7",
        ),
        (
            build(&BorrowBookParams::new().book_id(7).build()),
            Method::POST,
            "/books/borrow/7",
        ),
        (
            build(&ReturnBorrowBookParams::new().book_id(7).build()),
            Method::PATCH,
            "/books/borrow/return/7",
        ),
        (
            build(&ApproveReturnBorrowBookParams::new().book_id(7).build()),
            Method::PATCH,
            "/books/borrow/return/approve/7",
        ),
    ];

    for (req, method, path) in cases {
        assert_eq!(req.method(), method, "{path}");
        assert_eq!(
            req.uri().to_string(),
            format!("http://localhost:8088/api/v1{path}")
        );
        assert!(req.body().is_empty(), "{path} sends no body");
    }
}

#[test]
fn cover_upload_sends_file_part() {
    let req = build(
        &UploadBookCoverPictureParams::new()
            .book_id(7)
            .file_name("dune.png")
            .content_type("image/png")
            .data(b"\x89PNG".to_vec())
            .build(),
    );

    assert_eq!(req.method(), Method::POST);
    assert_eq!(req.uri(), "http://localhost:8088/api/v1/books/cover/7");
    let content_type = req.headers()[CONTENT_TYPE].to_str().unwrap();
    let boundary = content_type
        .strip_prefix("multipart/form-data; boundary=")
        .expect("multipart content type");

    let mut expected = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"dune.png\"\r\n\
         Content-Type: image/png\r\n\r\n"
    )
    .into_bytes();
    expected.extend_from_slice(b"\x89PNG");
    expected.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    assert_eq!(req.body(), &expected);
}
