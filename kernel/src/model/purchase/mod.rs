use chrono::{DateTime, Utc};

use super::id::{AudiobookId, PurchaseId, UserId};

pub mod event;

// purchase_date は呼び出し側が指定する（created_at 相当のカラムは持たない）
#[derive(Debug, Clone)]
pub struct Purchase {
    pub id: PurchaseId,
    pub user_id: UserId,
    pub audiobook_id: AudiobookId,
    pub purchase_date: DateTime<Utc>,
}
