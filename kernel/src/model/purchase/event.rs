use chrono::{DateTime, Utc};

use super::Purchase;
use crate::model::id::{AudiobookId, PurchaseId, UserId};

#[derive(Debug)]
pub struct CreatePurchase {
    pub user_id: UserId,
    pub audiobook_id: AudiobookId,
    pub purchase_date: DateTime<Utc>,
}

#[derive(Debug)]
pub struct UpdatePurchase {
    pub purchase_id: PurchaseId,
    pub user_id: Option<UserId>,
    pub audiobook_id: Option<AudiobookId>,
    pub purchase_date: Option<DateTime<Utc>>,
}

impl UpdatePurchase {
    pub fn apply(self, current: Purchase) -> Purchase {
        Purchase {
            user_id: self.user_id.unwrap_or(current.user_id),
            audiobook_id: self.audiobook_id.unwrap_or(current.audiobook_id),
            purchase_date: self.purchase_date.unwrap_or(current.purchase_date),
            ..current
        }
    }
}

#[derive(Debug)]
pub struct DeletePurchase {
    pub purchase_id: PurchaseId,
}
