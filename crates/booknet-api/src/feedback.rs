//! Feedback operations: `/feedbacks`

pub mod find_all_feedbacks_by_book;
pub mod savefeedback;
