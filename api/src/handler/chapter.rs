use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::{chapter::event::DeleteChapter, id::ChapterId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    chapter::{
        ChapterResponse, CreateChapterRequest, UpdateChapterRequest, UpdateChapterRequestWithId,
    },
    list::ListQuery,
};

pub async fn register_chapter(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateChapterRequest>,
) -> AppResult<Json<ChapterResponse>> {
    req.validate(&())?;
    registry
        .chapter_repository()
        .create(req.into())
        .await
        .map(ChapterResponse::from)
        .map(Json)
}

pub async fn show_chapter(
    State(registry): State<AppRegistry>,
    Path(chapter_id): Path<ChapterId>,
) -> AppResult<Json<ChapterResponse>> {
    registry
        .chapter_repository()
        .find_by_id(chapter_id)
        .await
        .and_then(|chapter| match chapter {
            Some(chapter) => Ok(Json(chapter.into())),
            None => Err(AppError::EntityNotFound("Chapter not found".into())),
        })
}

pub async fn show_chapter_list(
    State(registry): State<AppRegistry>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<ChapterResponse>>> {
    registry
        .chapter_repository()
        .find_all(query.into())
        .await
        .map(|chapters| chapters.into_iter().map(ChapterResponse::from).collect())
        .map(Json)
}

pub async fn update_chapter(
    State(registry): State<AppRegistry>,
    Path(chapter_id): Path<ChapterId>,
    Json(req): Json<UpdateChapterRequest>,
) -> AppResult<Json<ChapterResponse>> {
    req.validate(&())?;
    registry
        .chapter_repository()
        .update(UpdateChapterRequestWithId::new(chapter_id, req).into())
        .await
        .map(ChapterResponse::from)
        .map(Json)
}

pub async fn delete_chapter(
    State(registry): State<AppRegistry>,
    Path(chapter_id): Path<ChapterId>,
) -> AppResult<Json<ChapterResponse>> {
    registry
        .chapter_repository()
        .delete(DeleteChapter { chapter_id })
        .await
        .map(ChapterResponse::from)
        .map(Json)
}
