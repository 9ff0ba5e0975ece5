use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::ListeningHistoryId,
        list::ListOptions,
        listening_history::{
            event::{CreateListeningHistory, DeleteListeningHistory, UpdateListeningHistory},
            ListeningHistory,
        },
    },
    repository::listening_history::ListeningHistoryRepository,
};
use shared::error::{AppError, AppResult};

use crate::{
    database::{model::listening_history::ListeningHistoryRow, ConnectionPool},
    repository::map_constraint_error,
};

#[derive(new)]
pub struct ListeningHistoryRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ListeningHistoryRepository for ListeningHistoryRepositoryImpl {
    async fn create(&self, event: CreateListeningHistory) -> AppResult<ListeningHistory> {
        let row = sqlx::query_as::<_, ListeningHistoryRow>(
            "INSERT INTO listening_histories (user_id, audiobook_id, started_at, finished_at)
             VALUES ($1, $2, $3, $4)
             RETURNING history_id, user_id, audiobook_id, started_at, finished_at",
        )
        .bind(event.user_id.into_inner())
        .bind(event.audiobook_id.into_inner())
        .bind(event.started_at)
        .bind(event.finished_at)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| map_constraint_error(e, "listening history"))?;
        Ok(row.into())
    }

    async fn find_by_id(
        &self,
        history_id: ListeningHistoryId,
    ) -> AppResult<Option<ListeningHistory>> {
        let row = sqlx::query_as::<_, ListeningHistoryRow>(
            "SELECT history_id, user_id, audiobook_id, started_at, finished_at
             FROM listening_histories
             WHERE history_id = $1",
        )
        .bind(history_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(ListeningHistory::from))
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<ListeningHistory>> {
        let rows = sqlx::query_as::<_, ListeningHistoryRow>(
            "SELECT history_id, user_id, audiobook_id, started_at, finished_at
             FROM listening_histories
             ORDER BY history_id
             LIMIT $1 OFFSET $2",
        )
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(ListeningHistory::from).collect())
    }

    async fn update(&self, event: UpdateListeningHistory) -> AppResult<ListeningHistory> {
        let mut tx = self.db.begin().await?;
        let row = sqlx::query_as::<_, ListeningHistoryRow>(
            "SELECT history_id, user_id, audiobook_id, started_at, finished_at
             FROM listening_histories
             WHERE history_id = $1",
        )
        .bind(event.history_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound("ListeningHistory not found".into()))?;

        let history = event.apply(ListeningHistory::from(row));
        let res = sqlx::query(
            "UPDATE listening_histories
             SET user_id = $1, audiobook_id = $2, started_at = $3, finished_at = $4
             WHERE history_id = $5",
        )
        .bind(history.user_id.into_inner())
        .bind(history.audiobook_id.into_inner())
        .bind(history.started_at)
        .bind(history.finished_at)
        .bind(history.id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_constraint_error(e, "listening history"))?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowAffectedError(
                "no listening history has been updated".into(),
            ));
        }
        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(history)
    }

    async fn delete(&self, event: DeleteListeningHistory) -> AppResult<ListeningHistory> {
        let row = sqlx::query_as::<_, ListeningHistoryRow>(
            "DELETE FROM listening_histories
             WHERE history_id = $1
             RETURNING history_id, user_id, audiobook_id, started_at, finished_at",
        )
        .bind(event.history_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        row.map(ListeningHistory::from)
            .ok_or_else(|| AppError::EntityNotFound("ListeningHistory not found".into()))
    }
}
