use chrono::{DateTime, Utc};

use super::id::{AudiobookId, RatingId, UserId};

pub mod event;

// rating は 1〜5 の整数。範囲は API 境界で検証する
#[derive(Debug, Clone)]
pub struct Rating {
    pub id: RatingId,
    pub user_id: UserId,
    pub audiobook_id: AudiobookId,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}
