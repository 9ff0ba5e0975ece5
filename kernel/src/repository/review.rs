use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::ReviewId,
    list::ListOptions,
    review::{
        event::{CreateReview, DeleteReview, UpdateReview},
        Review,
    },
};

#[mockall::automock]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, event: CreateReview) -> AppResult<Review>;
    async fn find_by_id(&self, review_id: ReviewId) -> AppResult<Option<Review>>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Review>>;
    async fn update(&self, event: UpdateReview) -> AppResult<Review>;
    async fn delete(&self, event: DeleteReview) -> AppResult<Review>;
}
