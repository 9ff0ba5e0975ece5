use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::{id::SubscriptionId, subscription::event::DeleteSubscription};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    list::ListQuery,
    subscription::{
        CreateSubscriptionRequest, SubscriptionResponse, UpdateSubscriptionRequest,
        UpdateSubscriptionRequestWithId,
    },
};

pub async fn register_subscription(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateSubscriptionRequest>,
) -> AppResult<Json<SubscriptionResponse>> {
    req.validate(&())?;
    registry
        .subscription_repository()
        .create(req.into())
        .await
        .map(SubscriptionResponse::from)
        .map(Json)
}

pub async fn show_subscription(
    State(registry): State<AppRegistry>,
    Path(subscription_id): Path<SubscriptionId>,
) -> AppResult<Json<SubscriptionResponse>> {
    registry
        .subscription_repository()
        .find_by_id(subscription_id)
        .await
        .and_then(|subscription| match subscription {
            Some(subscription) => Ok(Json(subscription.into())),
            None => Err(AppError::EntityNotFound("Subscription not found".into())),
        })
}

pub async fn show_subscription_list(
    State(registry): State<AppRegistry>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<SubscriptionResponse>>> {
    registry
        .subscription_repository()
        .find_all(query.into())
        .await
        .map(|subscriptions| {
            subscriptions
                .into_iter()
                .map(SubscriptionResponse::from)
                .collect()
        })
        .map(Json)
}

pub async fn update_subscription(
    State(registry): State<AppRegistry>,
    Path(subscription_id): Path<SubscriptionId>,
    Json(req): Json<UpdateSubscriptionRequest>,
) -> AppResult<Json<SubscriptionResponse>> {
    req.validate(&())?;
    registry
        .subscription_repository()
        .update(UpdateSubscriptionRequestWithId::new(subscription_id, req).into())
        .await
        .map(SubscriptionResponse::from)
        .map(Json)
}

pub async fn delete_subscription(
    State(registry): State<AppRegistry>,
    Path(subscription_id): Path<SubscriptionId>,
) -> AppResult<Json<SubscriptionResponse>> {
    registry
        .subscription_repository()
        .delete(DeleteSubscription { subscription_id })
        .await
        .map(SubscriptionResponse::from)
        .map(Json)
}
