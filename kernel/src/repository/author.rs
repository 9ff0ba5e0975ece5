use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    author::{
        event::{CreateAuthor, DeleteAuthor, UpdateAuthor},
        Author,
    },
    id::AuthorId,
    list::ListOptions,
};

#[mockall::automock]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn create(&self, event: CreateAuthor) -> AppResult<Author>;
    async fn find_by_id(&self, author_id: AuthorId) -> AppResult<Option<Author>>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Author>>;
    async fn update(&self, event: UpdateAuthor) -> AppResult<Author>;
    async fn delete(&self, event: DeleteAuthor) -> AppResult<Author>;
}
