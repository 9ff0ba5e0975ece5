use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::{id::ReviewId, review::event::DeleteReview};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    list::ListQuery,
    review::{
        CreateReviewRequest, ReviewResponse, UpdateReviewRequest, UpdateReviewRequestWithId,
    },
};

pub async fn register_review(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReviewRequest>,
) -> AppResult<Json<ReviewResponse>> {
    req.validate(&())?;
    registry
        .review_repository()
        .create(req.into())
        .await
        .map(ReviewResponse::from)
        .map(Json)
}

pub async fn show_review(
    State(registry): State<AppRegistry>,
    Path(review_id): Path<ReviewId>,
) -> AppResult<Json<ReviewResponse>> {
    registry
        .review_repository()
        .find_by_id(review_id)
        .await
        .and_then(|review| match review {
            Some(review) => Ok(Json(review.into())),
            None => Err(AppError::EntityNotFound("Review not found".into())),
        })
}

pub async fn show_review_list(
    State(registry): State<AppRegistry>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<ReviewResponse>>> {
    registry
        .review_repository()
        .find_all(query.into())
        .await
        .map(|reviews| reviews.into_iter().map(ReviewResponse::from).collect())
        .map(Json)
}

pub async fn update_review(
    State(registry): State<AppRegistry>,
    Path(review_id): Path<ReviewId>,
    Json(req): Json<UpdateReviewRequest>,
) -> AppResult<Json<ReviewResponse>> {
    req.validate(&())?;
    registry
        .review_repository()
        .update(UpdateReviewRequestWithId::new(review_id, req).into())
        .await
        .map(ReviewResponse::from)
        .map(Json)
}

pub async fn delete_review(
    State(registry): State<AppRegistry>,
    Path(review_id): Path<ReviewId>,
) -> AppResult<Json<ReviewResponse>> {
    registry
        .review_repository()
        .delete(DeleteReview { review_id })
        .await
        .map(ReviewResponse::from)
        .map(Json)
}
