use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::{id::UserId, user::event::DeleteUser};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    list::ListQuery,
    subscription::{
        CreateUserSubscriptionRequest, CreateUserSubscriptionRequestWithUserId,
        UserSubscriptionResponse,
    },
    user::{CreateUserRequest, UpdateUserRequest, UpdateUserRequestWithId, UserResponse},
};

pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    req.validate(&())?;
    registry
        .user_repository()
        .create(req.into())
        .await
        .map(UserResponse::from)
        .map(Json)
}

pub async fn show_user(
    State(registry): State<AppRegistry>,
    Path(user_id): Path<UserId>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_repository()
        .find_by_id(user_id)
        .await
        .and_then(|user| match user {
            Some(user) => Ok(Json(user.into())),
            None => Err(AppError::EntityNotFound("User not found".into())),
        })
}

pub async fn show_user_list(
    State(registry): State<AppRegistry>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<UserResponse>>> {
    registry
        .user_repository()
        .find_all(query.into())
        .await
        .map(|users| users.into_iter().map(UserResponse::from).collect())
        .map(Json)
}

pub async fn update_user(
    State(registry): State<AppRegistry>,
    Path(user_id): Path<UserId>,
    Json(req): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    req.validate(&())?;
    registry
        .user_repository()
        .update(UpdateUserRequestWithId::new(user_id, req).into())
        .await
        .map(UserResponse::from)
        .map(Json)
}

pub async fn delete_user(
    State(registry): State<AppRegistry>,
    Path(user_id): Path<UserId>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_repository()
        .delete(DeleteUser { user_id })
        .await
        .map(UserResponse::from)
        .map(Json)
}

// サブスクリプションとのリンク行を作成する。
// 参照先の存在確認は外部キー制約に任せる
pub async fn subscribe_user(
    State(registry): State<AppRegistry>,
    Path(user_id): Path<UserId>,
    Json(req): Json<CreateUserSubscriptionRequest>,
) -> AppResult<Json<UserSubscriptionResponse>> {
    req.validate(&())?;
    registry
        .subscription_repository()
        .subscribe_user(CreateUserSubscriptionRequestWithUserId::new(user_id, req).into())
        .await
        .map(UserSubscriptionResponse::from)
        .map(Json)
}

pub async fn show_user_subscription_list(
    State(registry): State<AppRegistry>,
    Path(user_id): Path<UserId>,
) -> AppResult<Json<Vec<UserSubscriptionResponse>>> {
    registry
        .subscription_repository()
        .find_user_subscriptions(user_id)
        .await
        .map(|links| {
            links
                .into_iter()
                .map(UserSubscriptionResponse::from)
                .collect()
        })
        .map(Json)
}
