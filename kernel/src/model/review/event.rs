use super::Review;
use crate::model::id::{AudiobookId, ReviewId, UserId};

#[derive(Debug)]
pub struct CreateReview {
    pub user_id: UserId,
    pub audiobook_id: AudiobookId,
    pub review_text: Option<String>,
}

#[derive(Debug)]
pub struct UpdateReview {
    pub review_id: ReviewId,
    pub user_id: Option<UserId>,
    pub audiobook_id: Option<AudiobookId>,
    pub review_text: Option<Option<String>>,
}

impl UpdateReview {
    pub fn apply(self, current: Review) -> Review {
        Review {
            user_id: self.user_id.unwrap_or(current.user_id),
            audiobook_id: self.audiobook_id.unwrap_or(current.audiobook_id),
            review_text: self.review_text.unwrap_or(current.review_text),
            ..current
        }
    }
}

#[derive(Debug)]
pub struct DeleteReview {
    pub review_id: ReviewId,
}
