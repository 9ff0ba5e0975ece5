use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    bookmark::{
        event::{CreateBookmark, DeleteBookmark, UpdateBookmark},
        Bookmark,
    },
    id::BookmarkId,
    list::ListOptions,
};

#[mockall::automock]
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    async fn create(&self, event: CreateBookmark) -> AppResult<Bookmark>;
    async fn find_by_id(&self, bookmark_id: BookmarkId) -> AppResult<Option<Bookmark>>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Bookmark>>;
    async fn update(&self, event: UpdateBookmark) -> AppResult<Bookmark>;
    async fn delete(&self, event: DeleteBookmark) -> AppResult<Bookmark>;
}
