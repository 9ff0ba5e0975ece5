use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::UserId,
    list::ListOptions,
    user::{
        event::{CreateUser, DeleteUser, UpdateUser},
        User,
    },
};

#[mockall::automock]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
    // 主キー順で offset / limit の範囲を返す
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<User>>;
    async fn update(&self, event: UpdateUser) -> AppResult<User>;
    async fn delete(&self, event: DeleteUser) -> AppResult<User>;
}
