use booknet_api::feedback::find_all_feedbacks_by_book::FindAllFeedbacksByBookParams;
use booknet_api::feedback::savefeedback::SavefeedbackParams;

rest_service! {
    /// Feedback on books: leave a rating, list what others wrote
    FeedbackService {
        savefeedback / savefeedback_response
            => SAVEFEEDBACK_PATH: SavefeedbackParams;
        find_all_feedbacks_by_book / find_all_feedbacks_by_book_response
            => FIND_ALL_FEEDBACKS_BY_BOOK_PATH: FindAllFeedbacksByBookParams;
    }
}
