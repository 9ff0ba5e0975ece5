use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::{id::RatingId, rating::event::DeleteRating};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    list::ListQuery,
    rating::{
        CreateRatingRequest, RatingResponse, UpdateRatingRequest, UpdateRatingRequestWithId,
    },
};

pub async fn register_rating(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRatingRequest>,
) -> AppResult<Json<RatingResponse>> {
    req.validate(&())?;
    registry
        .rating_repository()
        .create(req.into())
        .await
        .map(RatingResponse::from)
        .map(Json)
}

pub async fn show_rating(
    State(registry): State<AppRegistry>,
    Path(rating_id): Path<RatingId>,
) -> AppResult<Json<RatingResponse>> {
    registry
        .rating_repository()
        .find_by_id(rating_id)
        .await
        .and_then(|rating| match rating {
            Some(rating) => Ok(Json(rating.into())),
            None => Err(AppError::EntityNotFound("Rating not found".into())),
        })
}

pub async fn show_rating_list(
    State(registry): State<AppRegistry>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<RatingResponse>>> {
    registry
        .rating_repository()
        .find_all(query.into())
        .await
        .map(|ratings| ratings.into_iter().map(RatingResponse::from).collect())
        .map(Json)
}

pub async fn update_rating(
    State(registry): State<AppRegistry>,
    Path(rating_id): Path<RatingId>,
    Json(req): Json<UpdateRatingRequest>,
) -> AppResult<Json<RatingResponse>> {
    req.validate(&())?;
    registry
        .rating_repository()
        .update(UpdateRatingRequestWithId::new(rating_id, req).into())
        .await
        .map(RatingResponse::from)
        .map(Json)
}

pub async fn delete_rating(
    State(registry): State<AppRegistry>,
    Path(rating_id): Path<RatingId>,
) -> AppResult<Json<RatingResponse>> {
    registry
        .rating_repository()
        .delete(DeleteRating { rating_id })
        .await
        .map(RatingResponse::from)
        .map(Json)
}
