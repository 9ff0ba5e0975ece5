use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::PurchaseId,
    list::ListOptions,
    purchase::{
        event::{CreatePurchase, DeletePurchase, UpdatePurchase},
        Purchase,
    },
};

#[mockall::automock]
#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    async fn create(&self, event: CreatePurchase) -> AppResult<Purchase>;
    async fn find_by_id(&self, purchase_id: PurchaseId) -> AppResult<Option<Purchase>>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Purchase>>;
    async fn update(&self, event: UpdatePurchase) -> AppResult<Purchase>;
    async fn delete(&self, event: DeletePurchase) -> AppResult<Purchase>;
}
