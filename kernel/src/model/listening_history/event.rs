use chrono::{DateTime, Utc};

use super::ListeningHistory;
use crate::model::id::{AudiobookId, ListeningHistoryId, UserId};

#[derive(Debug)]
pub struct CreateListeningHistory {
    pub user_id: UserId,
    pub audiobook_id: AudiobookId,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub struct UpdateListeningHistory {
    pub history_id: ListeningHistoryId,
    pub user_id: Option<UserId>,
    pub audiobook_id: Option<AudiobookId>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<Option<DateTime<Utc>>>,
}

impl UpdateListeningHistory {
    pub fn apply(self, current: ListeningHistory) -> ListeningHistory {
        ListeningHistory {
            user_id: self.user_id.unwrap_or(current.user_id),
            audiobook_id: self.audiobook_id.unwrap_or(current.audiobook_id),
            started_at: self.started_at.unwrap_or(current.started_at),
            finished_at: self.finished_at.unwrap_or(current.finished_at),
            ..current
        }
    }
}

#[derive(Debug)]
pub struct DeleteListeningHistory {
    pub history_id: ListeningHistoryId,
}
