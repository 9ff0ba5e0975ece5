use chrono::{DateTime, Utc};
use kernel::model::{
    id::{AudiobookId, PurchaseId, UserId},
    purchase::Purchase,
};

#[derive(sqlx::FromRow)]
pub struct PurchaseRow {
    pub purchase_id: i64,
    pub user_id: i64,
    pub audiobook_id: i64,
    pub purchase_date: DateTime<Utc>,
}

impl From<PurchaseRow> for Purchase {
    fn from(value: PurchaseRow) -> Self {
        let PurchaseRow {
            purchase_id,
            user_id,
            audiobook_id,
            purchase_date,
        } = value;
        Self {
            id: PurchaseId::new(purchase_id),
            user_id: UserId::new(user_id),
            audiobook_id: AudiobookId::new(audiobook_id),
            purchase_date,
        }
    }
}
