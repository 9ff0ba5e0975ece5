use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::PurchaseId,
        list::ListOptions,
        purchase::{
            event::{CreatePurchase, DeletePurchase, UpdatePurchase},
            Purchase,
        },
    },
    repository::purchase::PurchaseRepository,
};
use shared::error::{AppError, AppResult};

use crate::{
    database::{model::purchase::PurchaseRow, ConnectionPool},
    repository::map_constraint_error,
};

#[derive(new)]
pub struct PurchaseRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl PurchaseRepository for PurchaseRepositoryImpl {
    async fn create(&self, event: CreatePurchase) -> AppResult<Purchase> {
        let row = sqlx::query_as::<_, PurchaseRow>(
            "INSERT INTO purchases (user_id, audiobook_id, purchase_date)
             VALUES ($1, $2, $3)
             RETURNING purchase_id, user_id, audiobook_id, purchase_date",
        )
        .bind(event.user_id.into_inner())
        .bind(event.audiobook_id.into_inner())
        .bind(event.purchase_date)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| map_constraint_error(e, "purchase"))?;
        Ok(row.into())
    }

    async fn find_by_id(&self, purchase_id: PurchaseId) -> AppResult<Option<Purchase>> {
        let row = sqlx::query_as::<_, PurchaseRow>(
            "SELECT purchase_id, user_id, audiobook_id, purchase_date
             FROM purchases
             WHERE purchase_id = $1",
        )
        .bind(purchase_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(Purchase::from))
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Purchase>> {
        let rows = sqlx::query_as::<_, PurchaseRow>(
            "SELECT purchase_id, user_id, audiobook_id, purchase_date
             FROM purchases
             ORDER BY purchase_id
             LIMIT $1 OFFSET $2",
        )
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Purchase::from).collect())
    }

    async fn update(&self, event: UpdatePurchase) -> AppResult<Purchase> {
        let mut tx = self.db.begin().await?;
        let row = sqlx::query_as::<_, PurchaseRow>(
            "SELECT purchase_id, user_id, audiobook_id, purchase_date
             FROM purchases
             WHERE purchase_id = $1",
        )
        .bind(event.purchase_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound("Purchase not found".into()))?;

        let purchase = event.apply(Purchase::from(row));
        let res = sqlx::query(
            "UPDATE purchases SET user_id = $1, audiobook_id = $2, purchase_date = $3
             WHERE purchase_id = $4",
        )
        .bind(purchase.user_id.into_inner())
        .bind(purchase.audiobook_id.into_inner())
        .bind(purchase.purchase_date)
        .bind(purchase.id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_constraint_error(e, "purchase"))?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowAffectedError(
                "no purchase has been updated".into(),
            ));
        }
        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(purchase)
    }

    async fn delete(&self, event: DeletePurchase) -> AppResult<Purchase> {
        let row = sqlx::query_as::<_, PurchaseRow>(
            "DELETE FROM purchases
             WHERE purchase_id = $1
             RETURNING purchase_id, user_id, audiobook_id, purchase_date",
        )
        .bind(event.purchase_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        row.map(Purchase::from)
            .ok_or_else(|| AppError::EntityNotFound("Purchase not found".into()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use kernel::model::{
        audiobook::event::CreateAudiobook, author::event::CreateAuthor, user::event::CreateUser,
    };
    use kernel::repository::{
        audiobook::AudiobookRepository, author::AuthorRepository, user::UserRepository,
    };

    use super::*;
    use crate::repository::{
        audiobook::AudiobookRepositoryImpl, author::AuthorRepositoryImpl, user::UserRepositoryImpl,
    };

    #[sqlx::test]
    async fn purchase_round_trip(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let conn = ConnectionPool::new(pool);
        let user = UserRepositoryImpl::new(conn.clone())
            .create(CreateUser {
                username: "user1".into(),
                name: "John Doe".into(),
                email: "john@example.com".into(),
                password: "secretpassword".into(),
            })
            .await?;
        let author = AuthorRepositoryImpl::new(conn.clone())
            .create(CreateAuthor {
                name: "Author One".into(),
                bio: None,
            })
            .await?;
        let audiobook = AudiobookRepositoryImpl::new(conn.clone())
            .create(CreateAudiobook {
                title: "Audiobook One".into(),
                author_id: author.id,
                narrator_id: None,
                duration: 600,
                description: None,
                release_date: None,
            })
            .await?;
        let repo = PurchaseRepositoryImpl::new(conn);

        let purchase_date = Utc::now();
        let created = repo
            .create(CreatePurchase {
                user_id: user.id,
                audiobook_id: audiobook.id,
                purchase_date,
            })
            .await?;
        let found = repo
            .find_by_id(created.id)
            .await?
            .expect("purchase must exist");
        assert_eq!(found.user_id, user.id);
        assert_eq!(found.audiobook_id, audiobook.id);

        let deleted = repo
            .delete(DeletePurchase {
                purchase_id: created.id,
            })
            .await?;
        assert_eq!(deleted.id, created.id);
        assert!(repo.find_by_id(created.id).await?.is_none());
        Ok(())
    }
}
