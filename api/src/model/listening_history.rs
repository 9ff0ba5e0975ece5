use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{AudiobookId, ListeningHistoryId, UserId},
    listening_history::{
        event::{CreateListeningHistory, UpdateListeningHistory},
        ListeningHistory,
    },
};
use serde::{Deserialize, Serialize};

use super::double_option;

// started_at と finished_at の前後関係は検査しない
#[derive(Debug, Deserialize, Validate)]
pub struct CreateListeningHistoryRequest {
    #[garde(skip)]
    pub user_id: UserId,
    #[garde(skip)]
    pub audiobook_id: AudiobookId,
    #[garde(skip)]
    pub started_at: DateTime<Utc>,
    #[garde(skip)]
    pub finished_at: Option<DateTime<Utc>>,
}

impl From<CreateListeningHistoryRequest> for CreateListeningHistory {
    fn from(value: CreateListeningHistoryRequest) -> Self {
        let CreateListeningHistoryRequest {
            user_id,
            audiobook_id,
            started_at,
            finished_at,
        } = value;
        Self {
            user_id,
            audiobook_id,
            started_at,
            finished_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateListeningHistoryRequest {
    #[garde(skip)]
    pub user_id: Option<UserId>,
    #[garde(skip)]
    pub audiobook_id: Option<AudiobookId>,
    #[garde(skip)]
    pub started_at: Option<DateTime<Utc>>,
    #[garde(skip)]
    #[serde(default, deserialize_with = "double_option")]
    pub finished_at: Option<Option<DateTime<Utc>>>,
}

#[derive(new)]
pub struct UpdateListeningHistoryRequestWithId(ListeningHistoryId, UpdateListeningHistoryRequest);

impl From<UpdateListeningHistoryRequestWithId> for UpdateListeningHistory {
    fn from(value: UpdateListeningHistoryRequestWithId) -> Self {
        let UpdateListeningHistoryRequestWithId(history_id, req) = value;
        Self {
            history_id,
            user_id: req.user_id,
            audiobook_id: req.audiobook_id,
            started_at: req.started_at,
            finished_at: req.finished_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListeningHistoryResponse {
    pub history_id: ListeningHistoryId,
    pub user_id: UserId,
    pub audiobook_id: AudiobookId,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl From<ListeningHistory> for ListeningHistoryResponse {
    fn from(value: ListeningHistory) -> Self {
        let ListeningHistory {
            id,
            user_id,
            audiobook_id,
            started_at,
            finished_at,
        } = value;
        Self {
            history_id: id,
            user_id,
            audiobook_id,
            started_at,
            finished_at,
        }
    }
}
