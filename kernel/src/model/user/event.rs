use super::User;
use crate::model::id::UserId;

#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct UpdateUser {
    pub user_id: UserId,
    pub username: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateUser {
    // None のフィールドは現状維持
    pub fn apply(self, current: User) -> User {
        User {
            username: self.username.unwrap_or(current.username),
            name: self.name.unwrap_or(current.name),
            email: self.email.unwrap_or(current.email),
            password: self.password.unwrap_or(current.password),
            ..current
        }
    }
}

#[derive(Debug)]
pub struct DeleteUser {
    pub user_id: UserId,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rstest::rstest;

    use super::*;

    fn john() -> User {
        User {
            id: UserId::new(1),
            username: "user1".into(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
            password: "secretpassword".into(),
            created_at: Utc::now(),
        }
    }

    #[rstest]
    #[case(Some("updateduser".into()), "updateduser", "john@example.com")]
    #[case(None, "user1", "john@example.com")]
    fn update_overwrites_only_given_fields(
        #[case] username: Option<String>,
        #[case] expected_username: &str,
        #[case] expected_email: &str,
    ) {
        let event = UpdateUser {
            user_id: UserId::new(1),
            username,
            name: None,
            email: None,
            password: None,
        };
        let updated = event.apply(john());
        assert_eq!(updated.username, expected_username);
        assert_eq!(updated.email, expected_email);
        assert_eq!(updated.name, "John Doe");
    }
}
