use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::RatingId,
        list::ListOptions,
        rating::{
            event::{CreateRating, DeleteRating, UpdateRating},
            Rating,
        },
    },
    repository::rating::RatingRepository,
};
use shared::error::{AppError, AppResult};

use crate::{
    database::{model::rating::RatingRow, ConnectionPool},
    repository::map_constraint_error,
};

#[derive(new)]
pub struct RatingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RatingRepository for RatingRepositoryImpl {
    async fn create(&self, event: CreateRating) -> AppResult<Rating> {
        let row = sqlx::query_as::<_, RatingRow>(
            "INSERT INTO ratings (user_id, audiobook_id, rating)
             VALUES ($1, $2, $3)
             RETURNING rating_id, user_id, audiobook_id, rating, created_at",
        )
        .bind(event.user_id.into_inner())
        .bind(event.audiobook_id.into_inner())
        .bind(event.rating)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| map_constraint_error(e, "rating"))?;
        Ok(row.into())
    }

    async fn find_by_id(&self, rating_id: RatingId) -> AppResult<Option<Rating>> {
        let row = sqlx::query_as::<_, RatingRow>(
            "SELECT rating_id, user_id, audiobook_id, rating, created_at
             FROM ratings
             WHERE rating_id = $1",
        )
        .bind(rating_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(Rating::from))
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Rating>> {
        let rows = sqlx::query_as::<_, RatingRow>(
            "SELECT rating_id, user_id, audiobook_id, rating, created_at
             FROM ratings
             ORDER BY rating_id
             LIMIT $1 OFFSET $2",
        )
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Rating::from).collect())
    }

    async fn update(&self, event: UpdateRating) -> AppResult<Rating> {
        let mut tx = self.db.begin().await?;
        let row = sqlx::query_as::<_, RatingRow>(
            "SELECT rating_id, user_id, audiobook_id, rating, created_at
             FROM ratings
             WHERE rating_id = $1",
        )
        .bind(event.rating_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound("Rating not found".into()))?;

        let rating = event.apply(Rating::from(row));
        let res = sqlx::query(
            "UPDATE ratings SET user_id = $1, audiobook_id = $2, rating = $3
             WHERE rating_id = $4",
        )
        .bind(rating.user_id.into_inner())
        .bind(rating.audiobook_id.into_inner())
        .bind(rating.rating)
        .bind(rating.id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_constraint_error(e, "rating"))?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowAffectedError(
                "no rating has been updated".into(),
            ));
        }
        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(rating)
    }

    async fn delete(&self, event: DeleteRating) -> AppResult<Rating> {
        let row = sqlx::query_as::<_, RatingRow>(
            "DELETE FROM ratings
             WHERE rating_id = $1
             RETURNING rating_id, user_id, audiobook_id, rating, created_at",
        )
        .bind(event.rating_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        row.map(Rating::from)
            .ok_or_else(|| AppError::EntityNotFound("Rating not found".into()))
    }
}
