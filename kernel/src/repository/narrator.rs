use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::NarratorId,
    list::ListOptions,
    narrator::{
        event::{CreateNarrator, UpdateNarrator},
        Narrator,
    },
};

// ナレーターは削除できない
#[mockall::automock]
#[async_trait]
pub trait NarratorRepository: Send + Sync {
    async fn create(&self, event: CreateNarrator) -> AppResult<Narrator>;
    async fn find_by_id(&self, narrator_id: NarratorId) -> AppResult<Option<Narrator>>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Narrator>>;
    async fn update(&self, event: UpdateNarrator) -> AppResult<Narrator>;
}
