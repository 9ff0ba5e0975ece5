use chrono::{DateTime, Utc};

use super::id::{SubscriptionId, UserId};

pub mod event;

#[derive(Debug, Clone)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub name: String,
    pub price: f64,
    pub duration_days: i32,
    pub created_at: DateTime<Utc>,
}

// users と subscriptions を結ぶリンク行。複合キーなので独立した id は持たない
#[derive(Debug, Clone)]
pub struct UserSubscription {
    pub user_id: UserId,
    pub subscription_id: SubscriptionId,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}
