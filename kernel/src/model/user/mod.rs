use chrono::{DateTime, Utc};

use super::id::UserId;

pub mod event;

// password は与えられた文字列をそのまま保持する（ハッシュ化はこのシステムの責務外）
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}
