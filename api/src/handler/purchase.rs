use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::{id::PurchaseId, purchase::event::DeletePurchase};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    list::ListQuery,
    purchase::{
        CreatePurchaseRequest, PurchaseResponse, UpdatePurchaseRequest,
        UpdatePurchaseRequestWithId,
    },
};

pub async fn register_purchase(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreatePurchaseRequest>,
) -> AppResult<Json<PurchaseResponse>> {
    req.validate(&())?;
    registry
        .purchase_repository()
        .create(req.into())
        .await
        .map(PurchaseResponse::from)
        .map(Json)
}

pub async fn show_purchase(
    State(registry): State<AppRegistry>,
    Path(purchase_id): Path<PurchaseId>,
) -> AppResult<Json<PurchaseResponse>> {
    registry
        .purchase_repository()
        .find_by_id(purchase_id)
        .await
        .and_then(|purchase| match purchase {
            Some(purchase) => Ok(Json(purchase.into())),
            None => Err(AppError::EntityNotFound("Purchase not found".into())),
        })
}

pub async fn show_purchase_list(
    State(registry): State<AppRegistry>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<PurchaseResponse>>> {
    registry
        .purchase_repository()
        .find_all(query.into())
        .await
        .map(|purchases| purchases.into_iter().map(PurchaseResponse::from).collect())
        .map(Json)
}

pub async fn update_purchase(
    State(registry): State<AppRegistry>,
    Path(purchase_id): Path<PurchaseId>,
    Json(req): Json<UpdatePurchaseRequest>,
) -> AppResult<Json<PurchaseResponse>> {
    req.validate(&())?;
    registry
        .purchase_repository()
        .update(UpdatePurchaseRequestWithId::new(purchase_id, req).into())
        .await
        .map(PurchaseResponse::from)
        .map(Json)
}

pub async fn delete_purchase(
    State(registry): State<AppRegistry>,
    Path(purchase_id): Path<PurchaseId>,
) -> AppResult<Json<PurchaseResponse>> {
    registry
        .purchase_repository()
        .delete(DeletePurchase { purchase_id })
        .await
        .map(PurchaseResponse::from)
        .map(Json)
}
