use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::{id::ListeningHistoryId, listening_history::event::DeleteListeningHistory};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    list::ListQuery,
    listening_history::{
        CreateListeningHistoryRequest, ListeningHistoryResponse, UpdateListeningHistoryRequest,
        UpdateListeningHistoryRequestWithId,
    },
};

pub async fn register_listening_history(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateListeningHistoryRequest>,
) -> AppResult<Json<ListeningHistoryResponse>> {
    req.validate(&())?;
    registry
        .listening_history_repository()
        .create(req.into())
        .await
        .map(ListeningHistoryResponse::from)
        .map(Json)
}

pub async fn show_listening_history(
    State(registry): State<AppRegistry>,
    Path(history_id): Path<ListeningHistoryId>,
) -> AppResult<Json<ListeningHistoryResponse>> {
    registry
        .listening_history_repository()
        .find_by_id(history_id)
        .await
        .and_then(|history| match history {
            Some(history) => Ok(Json(history.into())),
            None => Err(AppError::EntityNotFound("ListeningHistory not found".into())),
        })
}

pub async fn show_listening_history_list(
    State(registry): State<AppRegistry>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<ListeningHistoryResponse>>> {
    registry
        .listening_history_repository()
        .find_all(query.into())
        .await
        .map(|histories| {
            histories
                .into_iter()
                .map(ListeningHistoryResponse::from)
                .collect()
        })
        .map(Json)
}

pub async fn update_listening_history(
    State(registry): State<AppRegistry>,
    Path(history_id): Path<ListeningHistoryId>,
    Json(req): Json<UpdateListeningHistoryRequest>,
) -> AppResult<Json<ListeningHistoryResponse>> {
    req.validate(&())?;
    registry
        .listening_history_repository()
        .update(UpdateListeningHistoryRequestWithId::new(history_id, req).into())
        .await
        .map(ListeningHistoryResponse::from)
        .map(Json)
}

pub async fn delete_listening_history(
    State(registry): State<AppRegistry>,
    Path(history_id): Path<ListeningHistoryId>,
) -> AppResult<Json<ListeningHistoryResponse>> {
    registry
        .listening_history_repository()
        .delete(DeleteListeningHistory { history_id })
        .await
        .map(ListeningHistoryResponse::from)
        .map(Json)
}
