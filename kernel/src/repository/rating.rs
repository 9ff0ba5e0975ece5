use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::RatingId,
    list::ListOptions,
    rating::{
        event::{CreateRating, DeleteRating, UpdateRating},
        Rating,
    },
};

#[mockall::automock]
#[async_trait]
pub trait RatingRepository: Send + Sync {
    async fn create(&self, event: CreateRating) -> AppResult<Rating>;
    async fn find_by_id(&self, rating_id: RatingId) -> AppResult<Option<Rating>>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Rating>>;
    async fn update(&self, event: UpdateRating) -> AppResult<Rating>;
    async fn delete(&self, event: DeleteRating) -> AppResult<Rating>;
}
