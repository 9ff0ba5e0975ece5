use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::{category::event::DeleteCategory, id::CategoryId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    category::{
        CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest,
        UpdateCategoryRequestWithId,
    },
    list::ListQuery,
};

pub async fn register_category(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateCategoryRequest>,
) -> AppResult<Json<CategoryResponse>> {
    req.validate(&())?;
    registry
        .category_repository()
        .create(req.into())
        .await
        .map(CategoryResponse::from)
        .map(Json)
}

pub async fn show_category(
    State(registry): State<AppRegistry>,
    Path(category_id): Path<CategoryId>,
) -> AppResult<Json<CategoryResponse>> {
    registry
        .category_repository()
        .find_by_id(category_id)
        .await
        .and_then(|category| match category {
            Some(category) => Ok(Json(category.into())),
            None => Err(AppError::EntityNotFound("Category not found".into())),
        })
}

pub async fn show_category_list(
    State(registry): State<AppRegistry>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<CategoryResponse>>> {
    registry
        .category_repository()
        .find_all(query.into())
        .await
        .map(|categories| categories.into_iter().map(CategoryResponse::from).collect())
        .map(Json)
}

pub async fn update_category(
    State(registry): State<AppRegistry>,
    Path(category_id): Path<CategoryId>,
    Json(req): Json<UpdateCategoryRequest>,
) -> AppResult<Json<CategoryResponse>> {
    req.validate(&())?;
    registry
        .category_repository()
        .update(UpdateCategoryRequestWithId::new(category_id, req).into())
        .await
        .map(CategoryResponse::from)
        .map(Json)
}

pub async fn delete_category(
    State(registry): State<AppRegistry>,
    Path(category_id): Path<CategoryId>,
) -> AppResult<Json<CategoryResponse>> {
    registry
        .category_repository()
        .delete(DeleteCategory { category_id })
        .await
        .map(CategoryResponse::from)
        .map(Json)
}
