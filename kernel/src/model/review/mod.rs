use chrono::{DateTime, Utc};

use super::id::{AudiobookId, ReviewId, UserId};

pub mod event;

#[derive(Debug, Clone)]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    pub audiobook_id: AudiobookId,
    pub review_text: Option<String>,
    pub created_at: DateTime<Utc>,
}
