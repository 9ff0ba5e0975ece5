use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::{bookmark::event::DeleteBookmark, id::BookmarkId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    bookmark::{
        BookmarkResponse, CreateBookmarkRequest, UpdateBookmarkRequest,
        UpdateBookmarkRequestWithId,
    },
    list::ListQuery,
};

pub async fn register_bookmark(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookmarkRequest>,
) -> AppResult<Json<BookmarkResponse>> {
    req.validate(&())?;
    registry
        .bookmark_repository()
        .create(req.into())
        .await
        .map(BookmarkResponse::from)
        .map(Json)
}

pub async fn show_bookmark(
    State(registry): State<AppRegistry>,
    Path(bookmark_id): Path<BookmarkId>,
) -> AppResult<Json<BookmarkResponse>> {
    registry
        .bookmark_repository()
        .find_by_id(bookmark_id)
        .await
        .and_then(|bookmark| match bookmark {
            Some(bookmark) => Ok(Json(bookmark.into())),
            None => Err(AppError::EntityNotFound("Bookmark not found".into())),
        })
}

pub async fn show_bookmark_list(
    State(registry): State<AppRegistry>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<BookmarkResponse>>> {
    registry
        .bookmark_repository()
        .find_all(query.into())
        .await
        .map(|bookmarks| bookmarks.into_iter().map(BookmarkResponse::from).collect())
        .map(Json)
}

pub async fn update_bookmark(
    State(registry): State<AppRegistry>,
    Path(bookmark_id): Path<BookmarkId>,
    Json(req): Json<UpdateBookmarkRequest>,
) -> AppResult<Json<BookmarkResponse>> {
    req.validate(&())?;
    registry
        .bookmark_repository()
        .update(UpdateBookmarkRequestWithId::new(bookmark_id, req).into())
        .await
        .map(BookmarkResponse::from)
        .map(Json)
}

pub async fn delete_bookmark(
    State(registry): State<AppRegistry>,
    Path(bookmark_id): Path<BookmarkId>,
) -> AppResult<Json<BookmarkResponse>> {
    registry
        .bookmark_repository()
        .delete(DeleteBookmark { bookmark_id })
        .await
        .map(BookmarkResponse::from)
        .map(Json)
}
