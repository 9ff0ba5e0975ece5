use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::{audiobook::event::DeleteAudiobook, id::AudiobookId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    audiobook::{
        AudiobookCategoryResponse, AudiobookResponse, CreateAudiobookCategoryRequest,
        CreateAudiobookCategoryRequestWithId, CreateAudiobookRequest, UpdateAudiobookRequest,
        UpdateAudiobookRequestWithId,
    },
    category::CategoryResponse,
    list::ListQuery,
};

pub async fn register_audiobook(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateAudiobookRequest>,
) -> AppResult<Json<AudiobookResponse>> {
    req.validate(&())?;
    registry
        .audiobook_repository()
        .create(req.into())
        .await
        .map(AudiobookResponse::from)
        .map(Json)
}

pub async fn show_audiobook(
    State(registry): State<AppRegistry>,
    Path(audiobook_id): Path<AudiobookId>,
) -> AppResult<Json<AudiobookResponse>> {
    registry
        .audiobook_repository()
        .find_by_id(audiobook_id)
        .await
        .and_then(|audiobook| match audiobook {
            Some(audiobook) => Ok(Json(audiobook.into())),
            None => Err(AppError::EntityNotFound("Audiobook not found".into())),
        })
}

pub async fn show_audiobook_list(
    State(registry): State<AppRegistry>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<AudiobookResponse>>> {
    registry
        .audiobook_repository()
        .find_all(query.into())
        .await
        .map(|audiobooks| {
            audiobooks
                .into_iter()
                .map(AudiobookResponse::from)
                .collect()
        })
        .map(Json)
}

pub async fn update_audiobook(
    State(registry): State<AppRegistry>,
    Path(audiobook_id): Path<AudiobookId>,
    Json(req): Json<UpdateAudiobookRequest>,
) -> AppResult<Json<AudiobookResponse>> {
    req.validate(&())?;
    registry
        .audiobook_repository()
        .update(UpdateAudiobookRequestWithId::new(audiobook_id, req).into())
        .await
        .map(AudiobookResponse::from)
        .map(Json)
}

pub async fn delete_audiobook(
    State(registry): State<AppRegistry>,
    Path(audiobook_id): Path<AudiobookId>,
) -> AppResult<Json<AudiobookResponse>> {
    registry
        .audiobook_repository()
        .delete(DeleteAudiobook { audiobook_id })
        .await
        .map(AudiobookResponse::from)
        .map(Json)
}

pub async fn add_audiobook_category(
    State(registry): State<AppRegistry>,
    Path(audiobook_id): Path<AudiobookId>,
    Json(req): Json<CreateAudiobookCategoryRequest>,
) -> AppResult<Json<AudiobookCategoryResponse>> {
    req.validate(&())?;
    registry
        .audiobook_repository()
        .add_category(CreateAudiobookCategoryRequestWithId::new(audiobook_id, req).into())
        .await
        .map(AudiobookCategoryResponse::from)
        .map(Json)
}

pub async fn show_audiobook_category_list(
    State(registry): State<AppRegistry>,
    Path(audiobook_id): Path<AudiobookId>,
) -> AppResult<Json<Vec<CategoryResponse>>> {
    registry
        .audiobook_repository()
        .find_categories(audiobook_id)
        .await
        .map(|categories| categories.into_iter().map(CategoryResponse::from).collect())
        .map(Json)
}
