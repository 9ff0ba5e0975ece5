use chrono::{DateTime, Utc};
use kernel::model::{
    id::{AudiobookId, ReviewId, UserId},
    review::Review,
};

#[derive(sqlx::FromRow)]
pub struct ReviewRow {
    pub review_id: i64,
    pub user_id: i64,
    pub audiobook_id: i64,
    pub review_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(value: ReviewRow) -> Self {
        let ReviewRow {
            review_id,
            user_id,
            audiobook_id,
            review_text,
            created_at,
        } = value;
        Self {
            id: ReviewId::new(review_id),
            user_id: UserId::new(user_id),
            audiobook_id: AudiobookId::new(audiobook_id),
            review_text,
            created_at,
        }
    }
}
