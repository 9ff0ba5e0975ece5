use chrono::{DateTime, Utc};

use super::Subscription;
use crate::model::id::{SubscriptionId, UserId};

#[derive(Debug)]
pub struct CreateSubscription {
    pub name: String,
    pub price: f64,
    pub duration_days: i32,
}

#[derive(Debug)]
pub struct UpdateSubscription {
    pub subscription_id: SubscriptionId,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub duration_days: Option<i32>,
}

impl UpdateSubscription {
    pub fn apply(self, current: Subscription) -> Subscription {
        Subscription {
            name: self.name.unwrap_or(current.name),
            price: self.price.unwrap_or(current.price),
            duration_days: self.duration_days.unwrap_or(current.duration_days),
            ..current
        }
    }
}

#[derive(Debug)]
pub struct DeleteSubscription {
    pub subscription_id: SubscriptionId,
}

#[derive(Debug)]
pub struct CreateUserSubscription {
    pub user_id: UserId,
    pub subscription_id: SubscriptionId,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}
