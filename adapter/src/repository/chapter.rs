use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        chapter::{
            event::{CreateChapter, DeleteChapter, UpdateChapter},
            Chapter,
        },
        id::ChapterId,
        list::ListOptions,
    },
    repository::chapter::ChapterRepository,
};
use shared::error::{AppError, AppResult};

use crate::{
    database::{model::chapter::ChapterRow, ConnectionPool},
    repository::map_constraint_error,
};

#[derive(new)]
pub struct ChapterRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ChapterRepository for ChapterRepositoryImpl {
    async fn create(&self, event: CreateChapter) -> AppResult<Chapter> {
        let row = sqlx::query_as::<_, ChapterRow>(
            "INSERT INTO chapters (audiobook_id, title, duration, position)
             VALUES ($1, $2, $3, $4)
             RETURNING chapter_id, audiobook_id, title, duration, position, created_at",
        )
        .bind(event.audiobook_id.into_inner())
        .bind(&event.title)
        .bind(event.duration)
        .bind(event.position)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| map_constraint_error(e, "chapter"))?;
        Ok(row.into())
    }

    async fn find_by_id(&self, chapter_id: ChapterId) -> AppResult<Option<Chapter>> {
        let row = sqlx::query_as::<_, ChapterRow>(
            "SELECT chapter_id, audiobook_id, title, duration, position, created_at
             FROM chapters
             WHERE chapter_id = $1",
        )
        .bind(chapter_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(Chapter::from))
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Chapter>> {
        let rows = sqlx::query_as::<_, ChapterRow>(
            "SELECT chapter_id, audiobook_id, title, duration, position, created_at
             FROM chapters
             ORDER BY chapter_id
             LIMIT $1 OFFSET $2",
        )
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Chapter::from).collect())
    }

    async fn update(&self, event: UpdateChapter) -> AppResult<Chapter> {
        let mut tx = self.db.begin().await?;
        let row = sqlx::query_as::<_, ChapterRow>(
            "SELECT chapter_id, audiobook_id, title, duration, position, created_at
             FROM chapters
             WHERE chapter_id = $1",
        )
        .bind(event.chapter_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound("Chapter not found".into()))?;

        let chapter = event.apply(Chapter::from(row));
        let res = sqlx::query(
            "UPDATE chapters SET audiobook_id = $1, title = $2, duration = $3, position = $4
             WHERE chapter_id = $5",
        )
        .bind(chapter.audiobook_id.into_inner())
        .bind(&chapter.title)
        .bind(chapter.duration)
        .bind(chapter.position)
        .bind(chapter.id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_constraint_error(e, "chapter"))?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowAffectedError(
                "no chapter has been updated".into(),
            ));
        }
        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(chapter)
    }

    async fn delete(&self, event: DeleteChapter) -> AppResult<Chapter> {
        let row = sqlx::query_as::<_, ChapterRow>(
            "DELETE FROM chapters
             WHERE chapter_id = $1
             RETURNING chapter_id, audiobook_id, title, duration, position, created_at",
        )
        .bind(event.chapter_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(|e| map_constraint_error(e, "chapter"))?;
        row.map(Chapter::from)
            .ok_or_else(|| AppError::EntityNotFound("Chapter not found".into()))
    }
}

#[cfg(test)]
mod tests {
    use kernel::model::{audiobook::event::CreateAudiobook, author::event::CreateAuthor};
    use kernel::repository::{audiobook::AudiobookRepository, author::AuthorRepository};

    use super::*;
    use crate::repository::{audiobook::AudiobookRepositoryImpl, author::AuthorRepositoryImpl};

    #[sqlx::test]
    async fn explicit_null_clears_chapter_title(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let conn = ConnectionPool::new(pool);
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
        let repo = ChapterRepositoryImpl::new(conn);

        let created = repo
            .create(CreateChapter {
                audiobook_id: audiobook.id,
                title: Some("Intro".into()),
                duration: 120,
                position: 1,
            })
            .await?;
        let updated = repo
            .update(UpdateChapter {
                chapter_id: created.id,
                audiobook_id: None,
                title: Some(None),
                duration: None,
                position: None,
            })
            .await?;
        assert_eq!(updated.title, None);
        assert_eq!(updated.position, 1);
        assert_eq!(updated.duration, 120);
        Ok(())
    }
}
