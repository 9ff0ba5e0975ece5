use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::UserId,
        list::ListOptions,
        user::{
            event::{CreateUser, DeleteUser, UpdateUser},
            User,
        },
    },
    repository::user::UserRepository,
};
use shared::error::{AppError, AppResult};

use crate::{
    database::{model::user::UserRow, ConnectionPool},
    repository::map_constraint_error,
};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (username, name, email, password)
             VALUES ($1, $2, $3, $4)
             RETURNING user_id, username, name, email, password, created_at",
        )
        .bind(&event.username)
        .bind(&event.name)
        .bind(&event.email)
        .bind(&event.password)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| map_constraint_error(e, "user"))?;
        Ok(row.into())
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT user_id, username, name, email, password, created_at
             FROM users
             WHERE user_id = $1",
        )
        .bind(user_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(User::from))
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT user_id, username, name, email, password, created_at
             FROM users
             ORDER BY user_id
             LIMIT $1 OFFSET $2",
        )
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update(&self, event: UpdateUser) -> AppResult<User> {
        let mut tx = self.db.begin().await?;
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT user_id, username, name, email, password, created_at
             FROM users
             WHERE user_id = $1",
        )
        .bind(event.user_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound("User not found".into()))?;

        // 取得した現在値にイベントを適用してから全カラムを書き戻す
        let user = event.apply(User::from(row));
        let res = sqlx::query(
            "UPDATE users SET username = $1, name = $2, email = $3, password = $4
             WHERE user_id = $5",
        )
        .bind(&user.username)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_constraint_error(e, "user"))?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowAffectedError("no user has been updated".into()));
        }
        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(user)
    }

    async fn delete(&self, event: DeleteUser) -> AppResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "DELETE FROM users
             WHERE user_id = $1
             RETURNING user_id, username, name, email, password, created_at",
        )
        .bind(event.user_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(|e| map_constraint_error(e, "user"))?;
        row.map(User::from)
            .ok_or_else(|| AppError::EntityNotFound("User not found".into()))
    }
}

#[cfg(test)]
mod tests {
    use kernel::model::user::event::{CreateUser, DeleteUser, UpdateUser};

    use super::*;

    fn john() -> CreateUser {
        CreateUser {
            username: "user1".into(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
            password: "secretpassword".into(),
        }
    }

    #[sqlx::test]
    async fn register_then_fetch_user(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo.create(john()).await?;
        assert_eq!(created.username, "user1");

        let found = repo.find_by_id(created.id).await?.expect("user must exist");
        assert_eq!(found.username, created.username);
        assert_eq!(found.email, created.email);
        assert_eq!(found.created_at, created.created_at);
        Ok(())
    }

    #[sqlx::test]
    async fn duplicate_email_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(john()).await?;
        let res = repo
            .create(CreateUser {
                username: "user2".into(),
                name: "Jane Doe".into(),
                email: "john@example.com".into(),
                password: "secretpassword".into(),
            })
            .await;
        assert!(matches!(res, Err(AppError::UniqueConstraintError(_))));
        Ok(())
    }

    #[sqlx::test]
    async fn partial_update_keeps_untouched_fields(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo.create(john()).await?;
        let updated = repo
            .update(UpdateUser {
                user_id: created.id,
                username: Some("updateduser".into()),
                name: None,
                email: None,
                password: None,
            })
            .await?;
        assert_eq!(updated.username, "updateduser");
        assert_eq!(updated.name, "John Doe");
        assert_eq!(updated.email, "john@example.com");
        Ok(())
    }

    #[sqlx::test]
    async fn missing_user_is_not_found(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        assert!(repo.find_by_id(UserId::new(99999)).await?.is_none());
        let res = repo
            .delete(DeleteUser {
                user_id: UserId::new(99999),
            })
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }
}
