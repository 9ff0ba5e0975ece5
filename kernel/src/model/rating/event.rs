use super::Rating;
use crate::model::id::{AudiobookId, RatingId, UserId};

#[derive(Debug)]
pub struct CreateRating {
    pub user_id: UserId,
    pub audiobook_id: AudiobookId,
    pub rating: i32,
}

#[derive(Debug)]
pub struct UpdateRating {
    pub rating_id: RatingId,
    pub user_id: Option<UserId>,
    pub audiobook_id: Option<AudiobookId>,
    pub rating: Option<i32>,
}

impl UpdateRating {
    pub fn apply(self, current: Rating) -> Rating {
        Rating {
            user_id: self.user_id.unwrap_or(current.user_id),
            audiobook_id: self.audiobook_id.unwrap_or(current.audiobook_id),
            rating: self.rating.unwrap_or(current.rating),
            ..current
        }
    }
}

#[derive(Debug)]
pub struct DeleteRating {
    pub rating_id: RatingId,
}
