use chrono::{DateTime, Utc};
use kernel::model::{
    id::{AudiobookId, ListeningHistoryId, UserId},
    listening_history::ListeningHistory,
};

#[derive(sqlx::FromRow)]
pub struct ListeningHistoryRow {
    pub history_id: i64,
    pub user_id: i64,
    pub audiobook_id: i64,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl From<ListeningHistoryRow> for ListeningHistory {
    fn from(value: ListeningHistoryRow) -> Self {
        let ListeningHistoryRow {
            history_id,
            user_id,
            audiobook_id,
            started_at,
            finished_at,
        } = value;
        Self {
            id: ListeningHistoryId::new(history_id),
            user_id: UserId::new(user_id),
            audiobook_id: AudiobookId::new(audiobook_id),
            started_at,
            finished_at,
        }
    }
}
