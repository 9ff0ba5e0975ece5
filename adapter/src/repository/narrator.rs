use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::NarratorId,
        list::ListOptions,
        narrator::{
            event::{CreateNarrator, UpdateNarrator},
            Narrator,
        },
    },
    repository::narrator::NarratorRepository,
};
use shared::error::{AppError, AppResult};

use crate::{
    database::{model::narrator::NarratorRow, ConnectionPool},
    repository::map_constraint_error,
};

#[derive(new)]
pub struct NarratorRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl NarratorRepository for NarratorRepositoryImpl {
    async fn create(&self, event: CreateNarrator) -> AppResult<Narrator> {
        let row = sqlx::query_as::<_, NarratorRow>(
            "INSERT INTO narrators (name, bio)
             VALUES ($1, $2)
             RETURNING narrator_id, name, bio, created_at",
        )
        .bind(&event.name)
        .bind(&event.bio)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| map_constraint_error(e, "narrator"))?;
        Ok(row.into())
    }

    async fn find_by_id(&self, narrator_id: NarratorId) -> AppResult<Option<Narrator>> {
        let row = sqlx::query_as::<_, NarratorRow>(
            "SELECT narrator_id, name, bio, created_at FROM narrators WHERE narrator_id = $1",
        )
        .bind(narrator_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(Narrator::from))
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Narrator>> {
        let rows = sqlx::query_as::<_, NarratorRow>(
            "SELECT narrator_id, name, bio, created_at
             FROM narrators
             ORDER BY narrator_id
             LIMIT $1 OFFSET $2",
        )
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Narrator::from).collect())
    }

    async fn update(&self, event: UpdateNarrator) -> AppResult<Narrator> {
        let mut tx = self.db.begin().await?;
        let row = sqlx::query_as::<_, NarratorRow>(
            "SELECT narrator_id, name, bio, created_at FROM narrators WHERE narrator_id = $1",
        )
        .bind(event.narrator_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound("Narrator not found".into()))?;

        let narrator = event.apply(Narrator::from(row));
        let res = sqlx::query("UPDATE narrators SET name = $1, bio = $2 WHERE narrator_id = $3")
            .bind(&narrator.name)
            .bind(&narrator.bio)
            .bind(narrator.id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowAffectedError(
                "no narrator has been updated".into(),
            ));
        }
        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(narrator)
    }
}
