use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        bookmark::{
            event::{CreateBookmark, DeleteBookmark, UpdateBookmark},
            Bookmark,
        },
        id::{BookmarkId, ChapterId},
        list::ListOptions,
    },
    repository::bookmark::BookmarkRepository,
};
use shared::error::{AppError, AppResult};

use crate::{
    database::{model::bookmark::BookmarkRow, ConnectionPool},
    repository::map_constraint_error,
};

#[derive(new)]
pub struct BookmarkRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookmarkRepository for BookmarkRepositoryImpl {
    async fn create(&self, event: CreateBookmark) -> AppResult<Bookmark> {
        let row = sqlx::query_as::<_, BookmarkRow>(
            "INSERT INTO bookmarks (user_id, audiobook_id, chapter_id, position)
             VALUES ($1, $2, $3, $4)
             RETURNING bookmark_id, user_id, audiobook_id, chapter_id, position, created_at",
        )
        .bind(event.user_id.into_inner())
        .bind(event.audiobook_id.into_inner())
        .bind(event.chapter_id.map(ChapterId::into_inner))
        .bind(event.position)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| map_constraint_error(e, "bookmark"))?;
        Ok(row.into())
    }

    async fn find_by_id(&self, bookmark_id: BookmarkId) -> AppResult<Option<Bookmark>> {
        let row = sqlx::query_as::<_, BookmarkRow>(
            "SELECT bookmark_id, user_id, audiobook_id, chapter_id, position, created_at
             FROM bookmarks
             WHERE bookmark_id = $1",
        )
        .bind(bookmark_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(Bookmark::from))
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Bookmark>> {
        let rows = sqlx::query_as::<_, BookmarkRow>(
            "SELECT bookmark_id, user_id, audiobook_id, chapter_id, position, created_at
             FROM bookmarks
             ORDER BY bookmark_id
             LIMIT $1 OFFSET $2",
        )
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Bookmark::from).collect())
    }

    async fn update(&self, event: UpdateBookmark) -> AppResult<Bookmark> {
        let mut tx = self.db.begin().await?;
        let row = sqlx::query_as::<_, BookmarkRow>(
            "SELECT bookmark_id, user_id, audiobook_id, chapter_id, position, created_at
             FROM bookmarks
             WHERE bookmark_id = $1",
        )
        .bind(event.bookmark_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound("Bookmark not found".into()))?;

        let bookmark = event.apply(Bookmark::from(row));
        let res = sqlx::query(
            "UPDATE bookmarks
             SET user_id = $1, audiobook_id = $2, chapter_id = $3, position = $4
             WHERE bookmark_id = $5",
        )
        .bind(bookmark.user_id.into_inner())
        .bind(bookmark.audiobook_id.into_inner())
        .bind(bookmark.chapter_id.map(ChapterId::into_inner))
        .bind(bookmark.position)
        .bind(bookmark.id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_constraint_error(e, "bookmark"))?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowAffectedError(
                "no bookmark has been updated".into(),
            ));
        }
        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(bookmark)
    }

    async fn delete(&self, event: DeleteBookmark) -> AppResult<Bookmark> {
        let row = sqlx::query_as::<_, BookmarkRow>(
            "DELETE FROM bookmarks
             WHERE bookmark_id = $1
             RETURNING bookmark_id, user_id, audiobook_id, chapter_id, position, created_at",
        )
        .bind(event.bookmark_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        row.map(Bookmark::from)
            .ok_or_else(|| AppError::EntityNotFound("Bookmark not found".into()))
    }
}
