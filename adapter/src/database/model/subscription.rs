use chrono::{DateTime, Utc};
use kernel::model::{
    id::{SubscriptionId, UserId},
    subscription::{Subscription, UserSubscription},
};

#[derive(sqlx::FromRow)]
pub struct SubscriptionRow {
    pub subscription_id: i64,
    pub name: String,
    pub price: f64,
    pub duration_days: i32,
    pub created_at: DateTime<Utc>,
}

impl From<SubscriptionRow> for Subscription {
    fn from(value: SubscriptionRow) -> Self {
        let SubscriptionRow {
            subscription_id,
            name,
            price,
            duration_days,
            created_at,
        } = value;
        Self {
            id: SubscriptionId::new(subscription_id),
            name,
            price,
            duration_days,
            created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct UserSubscriptionRow {
    pub user_id: i64,
    pub subscription_id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl From<UserSubscriptionRow> for UserSubscription {
    fn from(value: UserSubscriptionRow) -> Self {
        let UserSubscriptionRow {
            user_id,
            subscription_id,
            start_date,
            end_date,
        } = value;
        Self {
            user_id: UserId::new(user_id),
            subscription_id: SubscriptionId::new(subscription_id),
            start_date,
            end_date,
        }
    }
}
