use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::ReviewId,
        list::ListOptions,
        review::{
            event::{CreateReview, DeleteReview, UpdateReview},
            Review,
        },
    },
    repository::review::ReviewRepository,
};
use shared::error::{AppError, AppResult};

use crate::{
    database::{model::review::ReviewRow, ConnectionPool},
    repository::map_constraint_error,
};

#[derive(new)]
pub struct ReviewRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn create(&self, event: CreateReview) -> AppResult<Review> {
        let row = sqlx::query_as::<_, ReviewRow>(
            "INSERT INTO reviews (user_id, audiobook_id, review_text)
             VALUES ($1, $2, $3)
             RETURNING review_id, user_id, audiobook_id, review_text, created_at",
        )
        .bind(event.user_id.into_inner())
        .bind(event.audiobook_id.into_inner())
        .bind(&event.review_text)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| map_constraint_error(e, "review"))?;
        Ok(row.into())
    }

    async fn find_by_id(&self, review_id: ReviewId) -> AppResult<Option<Review>> {
        let row = sqlx::query_as::<_, ReviewRow>(
            "SELECT review_id, user_id, audiobook_id, review_text, created_at
             FROM reviews
             WHERE review_id = $1",
        )
        .bind(review_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(Review::from))
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            "SELECT review_id, user_id, audiobook_id, review_text, created_at
             FROM reviews
             ORDER BY review_id
             LIMIT $1 OFFSET $2",
        )
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn update(&self, event: UpdateReview) -> AppResult<Review> {
        let mut tx = self.db.begin().await?;
        let row = sqlx::query_as::<_, ReviewRow>(
            "SELECT review_id, user_id, audiobook_id, review_text, created_at
             FROM reviews
             WHERE review_id = $1",
        )
        .bind(event.review_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound("Review not found".into()))?;

        let review = event.apply(Review::from(row));
        let res = sqlx::query(
            "UPDATE reviews SET user_id = $1, audiobook_id = $2, review_text = $3
             WHERE review_id = $4",
        )
        .bind(review.user_id.into_inner())
        .bind(review.audiobook_id.into_inner())
        .bind(&review.review_text)
        .bind(review.id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_constraint_error(e, "review"))?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowAffectedError(
                "no review has been updated".into(),
            ));
        }
        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(review)
    }

    async fn delete(&self, event: DeleteReview) -> AppResult<Review> {
        let row = sqlx::query_as::<_, ReviewRow>(
            "DELETE FROM reviews
             WHERE review_id = $1
             RETURNING review_id, user_id, audiobook_id, review_text, created_at",
        )
        .bind(event.review_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        row.map(Review::from)
            .ok_or_else(|| AppError::EntityNotFound("Review not found".into()))
    }
}
