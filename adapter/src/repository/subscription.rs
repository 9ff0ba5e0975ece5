use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::{SubscriptionId, UserId},
        list::ListOptions,
        subscription::{
            event::{
                CreateSubscription, CreateUserSubscription, DeleteSubscription,
                UpdateSubscription,
            },
            Subscription, UserSubscription,
        },
    },
    repository::subscription::SubscriptionRepository,
};
use shared::error::{AppError, AppResult};

use crate::{
    database::{
        model::subscription::{SubscriptionRow, UserSubscriptionRow},
        ConnectionPool,
    },
    repository::map_constraint_error,
};

#[derive(new)]
pub struct SubscriptionRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SubscriptionRepository for SubscriptionRepositoryImpl {
    async fn create(&self, event: CreateSubscription) -> AppResult<Subscription> {
        let row = sqlx::query_as::<_, SubscriptionRow>(
            "INSERT INTO subscriptions (name, price, duration_days)
             VALUES ($1, $2, $3)
             RETURNING subscription_id, name, price, duration_days, created_at",
        )
        .bind(&event.name)
        .bind(event.price)
        .bind(event.duration_days)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| map_constraint_error(e, "subscription"))?;
        Ok(row.into())
    }

    async fn find_by_id(
        &self,
        subscription_id: SubscriptionId,
    ) -> AppResult<Option<Subscription>> {
        let row = sqlx::query_as::<_, SubscriptionRow>(
            "SELECT subscription_id, name, price, duration_days, created_at
             FROM subscriptions
             WHERE subscription_id = $1",
        )
        .bind(subscription_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(Subscription::from))
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Subscription>> {
        let rows = sqlx::query_as::<_, SubscriptionRow>(
            "SELECT subscription_id, name, price, duration_days, created_at
             FROM subscriptions
             ORDER BY subscription_id
             LIMIT $1 OFFSET $2",
        )
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Subscription::from).collect())
    }

    async fn update(&self, event: UpdateSubscription) -> AppResult<Subscription> {
        let mut tx = self.db.begin().await?;
        let row = sqlx::query_as::<_, SubscriptionRow>(
            "SELECT subscription_id, name, price, duration_days, created_at
             FROM subscriptions
             WHERE subscription_id = $1",
        )
        .bind(event.subscription_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound("Subscription not found".into()))?;

        let subscription = event.apply(Subscription::from(row));
        let res = sqlx::query(
            "UPDATE subscriptions SET name = $1, price = $2, duration_days = $3
             WHERE subscription_id = $4",
        )
        .bind(&subscription.name)
        .bind(subscription.price)
        .bind(subscription.duration_days)
        .bind(subscription.id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowAffectedError(
                "no subscription has been updated".into(),
            ));
        }
        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(subscription)
    }

    async fn delete(&self, event: DeleteSubscription) -> AppResult<Subscription> {
        let row = sqlx::query_as::<_, SubscriptionRow>(
            "DELETE FROM subscriptions
             WHERE subscription_id = $1
             RETURNING subscription_id, name, price, duration_days, created_at",
        )
        .bind(event.subscription_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(|e| map_constraint_error(e, "subscription"))?;
        row.map(Subscription::from)
            .ok_or_else(|| AppError::EntityNotFound("Subscription not found".into()))
    }

    async fn subscribe_user(
        &self,
        event: CreateUserSubscription,
    ) -> AppResult<UserSubscription> {
        let row = sqlx::query_as::<_, UserSubscriptionRow>(
            "INSERT INTO user_subscriptions (user_id, subscription_id, start_date, end_date)
             VALUES ($1, $2, $3, $4)
             RETURNING user_id, subscription_id, start_date, end_date",
        )
        .bind(event.user_id.into_inner())
        .bind(event.subscription_id.into_inner())
        .bind(event.start_date)
        .bind(event.end_date)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| map_constraint_error(e, "user subscription"))?;
        Ok(row.into())
    }

    async fn find_user_subscriptions(
        &self,
        user_id: UserId,
    ) -> AppResult<Vec<UserSubscription>> {
        let rows = sqlx::query_as::<_, UserSubscriptionRow>(
            "SELECT user_id, subscription_id, start_date, end_date
             FROM user_subscriptions
             WHERE user_id = $1
             ORDER BY subscription_id",
        )
        .bind(user_id.into_inner())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(UserSubscription::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use kernel::model::user::event::CreateUser;
    use kernel::repository::user::UserRepository;

    use super::*;
    use crate::repository::user::UserRepositoryImpl;

    #[sqlx::test]
    async fn register_then_fetch_subscription(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = SubscriptionRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo
            .create(CreateSubscription {
                name: "Monthly Plan".into(),
                price: 9.99,
                duration_days: 30,
            })
            .await?;
        assert!(created.id.into_inner() > 0);

        let found = repo
            .find_by_id(created.id)
            .await?
            .expect("subscription must exist");
        assert_eq!(found.name, "Monthly Plan");
        assert_eq!(found.price, 9.99);
        assert_eq!(found.duration_days, 30);
        Ok(())
    }

    #[sqlx::test]
    async fn subscribe_user_and_list_links(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let conn = ConnectionPool::new(pool);
        let users = UserRepositoryImpl::new(conn.clone());
        let repo = SubscriptionRepositoryImpl::new(conn);

        let user = users
            .create(CreateUser {
                username: "user1".into(),
                name: "John Doe".into(),
                email: "john@example.com".into(),
                password: "secretpassword".into(),
            })
            .await?;
        let subscription = repo
            .create(CreateSubscription {
                name: "Monthly Plan".into(),
                price: 9.99,
                duration_days: 30,
            })
            .await?;

        let start = Utc::now();
        let link = repo
            .subscribe_user(CreateUserSubscription {
                user_id: user.id,
                subscription_id: subscription.id,
                start_date: start,
                end_date: start + Duration::days(30),
            })
            .await?;
        assert_eq!(link.user_id, user.id);

        let links = repo.find_user_subscriptions(user.id).await?;
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].subscription_id, subscription.id);

        // 同じ (user, subscription) の組は複合主キーに弾かれる
        let dup = repo
            .subscribe_user(CreateUserSubscription {
                user_id: user.id,
                subscription_id: subscription.id,
                start_date: start,
                end_date: start + Duration::days(30),
            })
            .await;
        assert!(matches!(dup, Err(AppError::UniqueConstraintError(_))));
        Ok(())
    }

    #[sqlx::test]
    async fn subscribe_missing_user_violates_fk(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = SubscriptionRepositoryImpl::new(ConnectionPool::new(pool));

        let subscription = repo
            .create(CreateSubscription {
                name: "Monthly Plan".into(),
                price: 9.99,
                duration_days: 30,
            })
            .await?;
        let start = Utc::now();
        let res = repo
            .subscribe_user(CreateUserSubscription {
                user_id: UserId::new(99999),
                subscription_id: subscription.id,
                start_date: start,
                end_date: start,
            })
            .await;
        assert!(matches!(res, Err(AppError::ForeignKeyConstraintError(_))));
        Ok(())
    }
}
