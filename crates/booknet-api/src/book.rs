//! Book catalogue and borrowing operations: `/books`

pub mod approve_return_borrow_book;
pub mod borrow_book;
pub mod find_all_books;
pub mod find_all_books_by_owner;
pub mod find_all_borrowed_books;
pub mod find_all_returned_books;
pub mod find_book_by_id;
pub mod return_borrow_book;
pub mod save_book;
pub mod update_archived_status;
pub mod update_shareable_status;
pub mod upload_book_cover_picture;
