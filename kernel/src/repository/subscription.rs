use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::{SubscriptionId, UserId},
    list::ListOptions,
    subscription::{
        event::{
            CreateSubscription, CreateUserSubscription, DeleteSubscription, UpdateSubscription,
        },
        Subscription, UserSubscription,
    },
};

#[mockall::automock]
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn create(&self, event: CreateSubscription) -> AppResult<Subscription>;
    async fn find_by_id(&self, subscription_id: SubscriptionId)
        -> AppResult<Option<Subscription>>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Subscription>>;
    async fn update(&self, event: UpdateSubscription) -> AppResult<Subscription>;
    async fn delete(&self, event: DeleteSubscription) -> AppResult<Subscription>;

    // リンク行の作成と、ユーザーに紐づくリンク行の取得
    async fn subscribe_user(&self, event: CreateUserSubscription) -> AppResult<UserSubscription>;
    async fn find_user_subscriptions(&self, user_id: UserId) -> AppResult<Vec<UserSubscription>>;
}
