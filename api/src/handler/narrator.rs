use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::id::NarratorId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    list::ListQuery,
    narrator::{
        CreateNarratorRequest, NarratorResponse, UpdateNarratorRequest,
        UpdateNarratorRequestWithId,
    },
};

pub async fn register_narrator(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateNarratorRequest>,
) -> AppResult<Json<NarratorResponse>> {
    req.validate(&())?;
    registry
        .narrator_repository()
        .create(req.into())
        .await
        .map(NarratorResponse::from)
        .map(Json)
}

pub async fn show_narrator(
    State(registry): State<AppRegistry>,
    Path(narrator_id): Path<NarratorId>,
) -> AppResult<Json<NarratorResponse>> {
    registry
        .narrator_repository()
        .find_by_id(narrator_id)
        .await
        .and_then(|narrator| match narrator {
            Some(narrator) => Ok(Json(narrator.into())),
            None => Err(AppError::EntityNotFound("Narrator not found".into())),
        })
}

pub async fn show_narrator_list(
    State(registry): State<AppRegistry>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<NarratorResponse>>> {
    registry
        .narrator_repository()
        .find_all(query.into())
        .await
        .map(|narrators| narrators.into_iter().map(NarratorResponse::from).collect())
        .map(Json)
}

pub async fn update_narrator(
    State(registry): State<AppRegistry>,
    Path(narrator_id): Path<NarratorId>,
    Json(req): Json<UpdateNarratorRequest>,
) -> AppResult<Json<NarratorResponse>> {
    req.validate(&())?;
    registry
        .narrator_repository()
        .update(UpdateNarratorRequestWithId::new(narrator_id, req).into())
        .await
        .map(NarratorResponse::from)
        .map(Json)
}
