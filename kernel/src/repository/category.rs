use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    category::{
        event::{CreateCategory, DeleteCategory, UpdateCategory},
        Category,
    },
    id::CategoryId,
    list::ListOptions,
};

#[mockall::automock]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, event: CreateCategory) -> AppResult<Category>;
    async fn find_by_id(&self, category_id: CategoryId) -> AppResult<Option<Category>>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Category>>;
    async fn update(&self, event: UpdateCategory) -> AppResult<Category>;
    async fn delete(&self, event: DeleteCategory) -> AppResult<Category>;
}
