use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::ListeningHistoryId,
    list::ListOptions,
    listening_history::{
        event::{CreateListeningHistory, DeleteListeningHistory, UpdateListeningHistory},
        ListeningHistory,
    },
};

#[mockall::automock]
#[async_trait]
pub trait ListeningHistoryRepository: Send + Sync {
    async fn create(&self, event: CreateListeningHistory) -> AppResult<ListeningHistory>;
    async fn find_by_id(
        &self,
        history_id: ListeningHistoryId,
    ) -> AppResult<Option<ListeningHistory>>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<ListeningHistory>>;
    async fn update(&self, event: UpdateListeningHistory) -> AppResult<ListeningHistory>;
    async fn delete(&self, event: DeleteListeningHistory) -> AppResult<ListeningHistory>;
}
