use chrono::{DateTime, Utc};

use super::id::{AudiobookId, ListeningHistoryId, UserId};

pub mod event;

// finished_at が None の間は聴取中を表す。started_at との前後関係は検査しない
#[derive(Debug, Clone)]
pub struct ListeningHistory {
    pub id: ListeningHistoryId,
    pub user_id: UserId,
    pub audiobook_id: AudiobookId,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}
