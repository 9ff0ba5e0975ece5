use chrono::{DateTime, Utc};
use kernel::model::{
    id::{AudiobookId, RatingId, UserId},
    rating::Rating,
};

#[derive(sqlx::FromRow)]
pub struct RatingRow {
    pub rating_id: i64,
    pub user_id: i64,
    pub audiobook_id: i64,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

impl From<RatingRow> for Rating {
    fn from(value: RatingRow) -> Self {
        let RatingRow {
            rating_id,
            user_id,
            audiobook_id,
            rating,
            created_at,
        } = value;
        Self {
            id: RatingId::new(rating_id),
            user_id: UserId::new(user_id),
            audiobook_id: AudiobookId::new(audiobook_id),
            rating,
            created_at,
        }
    }
}
