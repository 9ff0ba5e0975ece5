use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{AudiobookId, PurchaseId, UserId},
    purchase::{
        event::{CreatePurchase, UpdatePurchase},
        Purchase,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePurchaseRequest {
    #[garde(skip)]
    pub user_id: UserId,
    #[garde(skip)]
    pub audiobook_id: AudiobookId,
    #[garde(skip)]
    pub purchase_date: DateTime<Utc>,
}

impl From<CreatePurchaseRequest> for CreatePurchase {
    fn from(value: CreatePurchaseRequest) -> Self {
        let CreatePurchaseRequest {
            user_id,
            audiobook_id,
            purchase_date,
        } = value;
        Self {
            user_id,
            audiobook_id,
            purchase_date,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePurchaseRequest {
    #[garde(skip)]
    pub user_id: Option<UserId>,
    #[garde(skip)]
    pub audiobook_id: Option<AudiobookId>,
    #[garde(skip)]
    pub purchase_date: Option<DateTime<Utc>>,
}

#[derive(new)]
pub struct UpdatePurchaseRequestWithId(PurchaseId, UpdatePurchaseRequest);

impl From<UpdatePurchaseRequestWithId> for UpdatePurchase {
    fn from(value: UpdatePurchaseRequestWithId) -> Self {
        let UpdatePurchaseRequestWithId(purchase_id, req) = value;
        Self {
            purchase_id,
            user_id: req.user_id,
            audiobook_id: req.audiobook_id,
            purchase_date: req.purchase_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub purchase_id: PurchaseId,
    pub user_id: UserId,
    pub audiobook_id: AudiobookId,
    pub purchase_date: DateTime<Utc>,
}

impl From<Purchase> for PurchaseResponse {
    fn from(value: Purchase) -> Self {
        let Purchase {
            id,
            user_id,
            audiobook_id,
            purchase_date,
        } = value;
        Self {
            purchase_id: id,
            user_id,
            audiobook_id,
            purchase_date,
        }
    }
}
