use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::UserId,
    user::{
        event::{CreateUser, UpdateUser},
        User,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[garde(length(min = 1, max = 50))]
    pub username: String,
    #[garde(length(min = 1, max = 50))]
    pub name: String,
    #[garde(email, length(max = 100))]
    pub email: String,
    #[garde(length(min = 1, max = 255))]
    pub password: String,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            username,
            name,
            email,
            password,
        } = value;
        Self {
            username,
            name,
            email,
            password,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[garde(length(min = 1, max = 50))]
    pub username: Option<String>,
    #[garde(length(min = 1, max = 50))]
    pub name: Option<String>,
    #[garde(email, length(max = 100))]
    pub email: Option<String>,
    #[garde(length(min = 1, max = 255))]
    pub password: Option<String>,
}

#[derive(new)]
pub struct UpdateUserRequestWithId(UserId, UpdateUserRequest);

impl From<UpdateUserRequestWithId> for UpdateUser {
    fn from(value: UpdateUserRequestWithId) -> Self {
        let UpdateUserRequestWithId(user_id, req) = value;
        Self {
            user_id,
            username: req.username,
            name: req.name,
            email: req.email,
            password: req.password,
        }
    }
}

// password はレスポンスに含めない
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: UserId,
    pub username: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            id,
            username,
            name,
            email,
            created_at,
            ..
        } = value;
        Self {
            user_id: id,
            username,
            name,
            email,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_email_fails_validation() {
        let req: CreateUserRequest = serde_json::from_str(
            r#"{"username": "user1", "name": "John Doe", "email": "not-an-email", "password": "secretpassword"}"#,
        )
        .unwrap();
        assert!(req.validate(&()).is_err());
    }
}
