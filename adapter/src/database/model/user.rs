use chrono::{DateTime, Utc};
use kernel::model::{id::UserId, user::User};

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            user_id,
            username,
            name,
            email,
            password,
            created_at,
        } = value;
        Self {
            id: UserId::new(user_id),
            username,
            name,
            email,
            password,
            created_at,
        }
    }
}
