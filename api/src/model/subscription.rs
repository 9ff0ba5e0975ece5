use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{SubscriptionId, UserId},
    subscription::{
        event::{CreateSubscription, CreateUserSubscription, UpdateSubscription},
        Subscription, UserSubscription,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubscriptionRequest {
    #[garde(length(min = 1, max = 50))]
    pub name: String,
    #[garde(range(min = 0.0))]
    pub price: f64,
    #[garde(range(min = 1))]
    pub duration_days: i32,
}

impl From<CreateSubscriptionRequest> for CreateSubscription {
    fn from(value: CreateSubscriptionRequest) -> Self {
        let CreateSubscriptionRequest {
            name,
            price,
            duration_days,
        } = value;
        Self {
            name,
            price,
            duration_days,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSubscriptionRequest {
    #[garde(length(min = 1, max = 50))]
    pub name: Option<String>,
    #[garde(range(min = 0.0))]
    pub price: Option<f64>,
    #[garde(range(min = 1))]
    pub duration_days: Option<i32>,
}

#[derive(new)]
pub struct UpdateSubscriptionRequestWithId(SubscriptionId, UpdateSubscriptionRequest);

impl From<UpdateSubscriptionRequestWithId> for UpdateSubscription {
    fn from(value: UpdateSubscriptionRequestWithId) -> Self {
        let UpdateSubscriptionRequestWithId(subscription_id, req) = value;
        Self {
            subscription_id,
            name: req.name,
            price: req.price,
            duration_days: req.duration_days,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubscriptionResponse {
    pub subscription_id: SubscriptionId,
    pub name: String,
    pub price: f64,
    pub duration_days: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Subscription> for SubscriptionResponse {
    fn from(value: Subscription) -> Self {
        let Subscription {
            id,
            name,
            price,
            duration_days,
            created_at,
        } = value;
        Self {
            subscription_id: id,
            name,
            price,
            duration_days,
            created_at,
        }
    }
}

// /users/{user_id}/subscriptions に POST するリクエスト。user_id はパスから補う
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserSubscriptionRequest {
    #[garde(skip)]
    pub subscription_id: SubscriptionId,
    #[garde(skip)]
    pub start_date: DateTime<Utc>,
    #[garde(skip)]
    pub end_date: DateTime<Utc>,
}

#[derive(new)]
pub struct CreateUserSubscriptionRequestWithUserId(UserId, CreateUserSubscriptionRequest);

impl From<CreateUserSubscriptionRequestWithUserId> for CreateUserSubscription {
    fn from(value: CreateUserSubscriptionRequestWithUserId) -> Self {
        let CreateUserSubscriptionRequestWithUserId(user_id, req) = value;
        Self {
            user_id,
            subscription_id: req.subscription_id,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserSubscriptionResponse {
    pub user_id: UserId,
    pub subscription_id: SubscriptionId,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl From<UserSubscription> for UserSubscriptionResponse {
    fn from(value: UserSubscription) -> Self {
        let UserSubscription {
            user_id,
            subscription_id,
            start_date,
            end_date,
        } = value;
        Self {
            user_id,
            subscription_id,
            start_date,
            end_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_price_fails_validation() {
        let req: CreateSubscriptionRequest = serde_json::from_str(
            r#"{"name": "Monthly Plan", "price": -1.0, "duration_days": 30}"#,
        )
        .unwrap();
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn monthly_plan_is_valid() {
        let req: CreateSubscriptionRequest = serde_json::from_str(
            r#"{"name": "Monthly Plan", "price": 9.99, "duration_days": 30}"#,
        )
        .unwrap();
        assert!(req.validate(&()).is_ok());
    }
}
