use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    chapter::{
        event::{CreateChapter, DeleteChapter, UpdateChapter},
        Chapter,
    },
    id::ChapterId,
    list::ListOptions,
};

#[mockall::automock]
#[async_trait]
pub trait ChapterRepository: Send + Sync {
    async fn create(&self, event: CreateChapter) -> AppResult<Chapter>;
    async fn find_by_id(&self, chapter_id: ChapterId) -> AppResult<Option<Chapter>>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Chapter>>;
    async fn update(&self, event: UpdateChapter) -> AppResult<Chapter>;
    async fn delete(&self, event: DeleteChapter) -> AppResult<Chapter>;
}
