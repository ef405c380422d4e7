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

rest_service! {
    /// Book catalogue, ownership flags and the borrow/return workflow
    BookService {
        save_book / save_book_response
            => SAVE_BOOK_PATH: SaveBookParams;
        find_book_by_id / find_book_by_id_response
            => FIND_BOOK_BY_ID_PATH: FindBookByIdParams;
        find_all_books / find_all_books_response
            => FIND_ALL_BOOKS_PATH: FindAllBooksParams;
        find_all_books_by_owner / find_all_books_by_owner_response
            => FIND_ALL_BOOKS_BY_OWNER_PATH: FindAllBooksByOwnerParams;
        find_all_borrowed_books / find_all_borrowed_books_response
            => FIND_ALL_BORROWED_BOOKS_PATH: FindAllBorrowedBooksParams;
        find_all_returned_books / find_all_returned_books_response
            => FIND_ALL_RETURNED_BOOKS_PATH: FindAllReturnedBooksParams;
        update_shareable_status / update_shareable_status_response
            => UPDATE_SHAREABLE_STATUS_PATH: UpdateShareableStatusParams;
        update_archived_status / update_archived_status_response
            => UPDATE_ARCHIVED_STATUS_PATH: UpdateArchivedStatusParams;
        borrow_book / borrow_book_response
            => BORROW_BOOK_PATH: BorrowBookParams;
        return_borrow_book / return_borrow_book_response
            => RETURN_BORROW_BOOK_PATH: ReturnBorrowBookParams;
        approve_return_borrow_book / approve_return_borrow_book_response
            => APPROVE_RETURN_BORROW_BOOK_PATH: ApproveReturnBorrowBookParams;
        upload_book_cover_picture / upload_book_cover_picture_response
            => UPLOAD_BOOK_COVER_PICTURE_PATH: UploadBookCoverPictureParams;
    }
}
