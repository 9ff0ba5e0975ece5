use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        audiobook::{
            event::{
                CreateAudiobook, CreateAudiobookCategory, DeleteAudiobook, UpdateAudiobook,
            },
            Audiobook, AudiobookCategory,
        },
        category::Category,
        id::{AudiobookId, AuthorId, NarratorId},
        list::ListOptions,
    },
    repository::audiobook::AudiobookRepository,
};
use shared::error::{AppError, AppResult};
use sqlx::PgExecutor;

use crate::{
    database::{
        model::{
            audiobook::{AudiobookCategoryRow, AudiobookRecordRow, AudiobookRow},
            category::CategoryRow,
        },
        ConnectionPool,
    },
    repository::map_constraint_error,
};

// 著者は必須参照なので内部結合、ナレーターは任意参照なので外部結合
const SELECT_AUDIOBOOK: &str = "SELECT a.audiobook_id, a.title, a.author_id, au.name AS author_name,
        a.narrator_id, n.name AS narrator_name,
        a.duration, a.description, a.release_date, a.created_at
 FROM audiobooks AS a
 INNER JOIN authors AS au ON a.author_id = au.author_id
 LEFT OUTER JOIN narrators AS n ON a.narrator_id = n.narrator_id";

#[derive(new)]
pub struct AudiobookRepositoryImpl {
    db: ConnectionPool,
}

impl AudiobookRepositoryImpl {
    async fn fetch_with_relations<'e, E>(
        executor: E,
        audiobook_id: i64,
    ) -> AppResult<Option<AudiobookRow>>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, AudiobookRow>(&format!(
            "{SELECT_AUDIOBOOK} WHERE a.audiobook_id = $1"
        ))
        .bind(audiobook_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::SpecificOperationError)
    }
}

#[async_trait]
impl AudiobookRepository for AudiobookRepositoryImpl {
    async fn create(&self, event: CreateAudiobook) -> AppResult<Audiobook> {
        let mut tx = self.db.begin().await?;
        let audiobook_id: i64 = sqlx::query_scalar(
            "INSERT INTO audiobooks (title, author_id, narrator_id, duration, description, release_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING audiobook_id",
        )
        .bind(&event.title)
        .bind(event.author_id.into_inner())
        .bind(event.narrator_id.map(NarratorId::into_inner))
        .bind(event.duration)
        .bind(&event.description)
        .bind(event.release_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_constraint_error(e, "audiobook"))?;

        let row = Self::fetch_with_relations(&mut *tx, audiobook_id)
            .await?
            .ok_or_else(|| {
                AppError::ConversionEntityError("created audiobook could not be reloaded".into())
            })?;
        tx.commit().await.map_err(AppError::TransactionError)?;
        row.try_into()
    }

    async fn find_by_id(&self, audiobook_id: AudiobookId) -> AppResult<Option<Audiobook>> {
        let row =
            Self::fetch_with_relations(self.db.inner_ref(), audiobook_id.into_inner()).await?;
        row.map(Audiobook::try_from).transpose()
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Audiobook>> {
        let rows = sqlx::query_as::<_, AudiobookRow>(&format!(
            "{SELECT_AUDIOBOOK} ORDER BY a.audiobook_id LIMIT $1 OFFSET $2"
        ))
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        rows.into_iter().map(Audiobook::try_from).collect()
    }

    async fn update(&self, event: UpdateAudiobook) -> AppResult<Audiobook> {
        let mut tx = self.db.begin().await?;
        let current = sqlx::query_as::<_, AudiobookRecordRow>(
            "SELECT audiobook_id, title, author_id, narrator_id, duration, description, release_date
             FROM audiobooks
             WHERE audiobook_id = $1",
        )
        .bind(event.audiobook_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound("Audiobook not found".into()))?;

        // 埋め込み参照を持つモデルには apply できないため、ここでカラム単位に適用する
        let title = event.title.unwrap_or(current.title);
        let author_id = event
            .author_id
            .map(AuthorId::into_inner)
            .unwrap_or(current.author_id);
        let narrator_id = event
            .narrator_id
            .map(|n| n.map(NarratorId::into_inner))
            .unwrap_or(current.narrator_id);
        let duration = event.duration.unwrap_or(current.duration);
        let description = event.description.unwrap_or(current.description);
        let release_date = event.release_date.unwrap_or(current.release_date);

        let res = sqlx::query(
            "UPDATE audiobooks
             SET title = $1, author_id = $2, narrator_id = $3, duration = $4,
                 description = $5, release_date = $6
             WHERE audiobook_id = $7",
        )
        .bind(&title)
        .bind(author_id)
        .bind(narrator_id)
        .bind(duration)
        .bind(&description)
        .bind(release_date)
        .bind(current.audiobook_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_constraint_error(e, "audiobook"))?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowAffectedError(
                "no audiobook has been updated".into(),
            ));
        }

        let row = Self::fetch_with_relations(&mut *tx, event.audiobook_id.into_inner())
            .await?
            .ok_or_else(|| {
                AppError::ConversionEntityError("updated audiobook could not be reloaded".into())
            })?;
        tx.commit().await.map_err(AppError::TransactionError)?;
        row.try_into()
    }

    async fn delete(&self, event: DeleteAudiobook) -> AppResult<Audiobook> {
        let mut tx = self.db.begin().await?;
        let row = Self::fetch_with_relations(&mut *tx, event.audiobook_id.into_inner())
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Audiobook not found".into()))?;

        let res = sqlx::query("DELETE FROM audiobooks WHERE audiobook_id = $1")
            .bind(event.audiobook_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_constraint_error(e, "audiobook"))?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowAffectedError(
                "no audiobook has been deleted".into(),
            ));
        }
        tx.commit().await.map_err(AppError::TransactionError)?;
        row.try_into()
    }

    async fn add_category(
        &self,
        event: CreateAudiobookCategory,
    ) -> AppResult<AudiobookCategory> {
        let row = sqlx::query_as::<_, AudiobookCategoryRow>(
            "INSERT INTO audiobook_categories (audiobook_id, category_id)
             VALUES ($1, $2)
             RETURNING audiobook_id, category_id",
        )
        .bind(event.audiobook_id.into_inner())
        .bind(event.category_id.into_inner())
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| map_constraint_error(e, "audiobook category"))?;
        Ok(row.into())
    }

    async fn find_categories(&self, audiobook_id: AudiobookId) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT c.category_id, c.name, c.created_at
             FROM categories AS c
             INNER JOIN audiobook_categories AS ac ON c.category_id = ac.category_id
             WHERE ac.audiobook_id = $1
             ORDER BY c.category_id",
        )
        .bind(audiobook_id.into_inner())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use kernel::model::{
        author::event::CreateAuthor, category::event::CreateCategory, id::CategoryId,
    };
    use kernel::repository::{author::AuthorRepository, category::CategoryRepository};

    use super::*;
    use crate::repository::{author::AuthorRepositoryImpl, category::CategoryRepositoryImpl};

    async fn create_author(conn: &ConnectionPool, name: &str) -> anyhow::Result<AuthorId> {
        let author = AuthorRepositoryImpl::new(conn.clone())
            .create(CreateAuthor {
                name: name.into(),
                bio: None,
            })
            .await?;
        Ok(author.id)
    }

    fn audiobook_one(author_id: AuthorId) -> CreateAudiobook {
        CreateAudiobook {
            title: "Audiobook One".into(),
            author_id,
            narrator_id: None,
            duration: 600,
            description: None,
            release_date: None,
        }
    }

    #[sqlx::test]
    async fn created_audiobook_embeds_author(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let conn = ConnectionPool::new(pool);
        let author_id = create_author(&conn, "Author One").await?;
        let repo = AudiobookRepositoryImpl::new(conn);

        let created = repo.create(audiobook_one(author_id)).await?;
        assert_eq!(created.title, "Audiobook One");
        assert_eq!(created.duration, 600);
        assert_eq!(created.author.id, author_id);
        assert_eq!(created.author.name, "Author One");
        assert!(created.narrator.is_none());

        let found = repo
            .find_by_id(created.id)
            .await?
            .expect("audiobook must exist");
        assert_eq!(found.title, created.title);
        assert_eq!(found.author.name, "Author One");
        Ok(())
    }

    #[sqlx::test]
    async fn dangling_author_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = AudiobookRepositoryImpl::new(ConnectionPool::new(pool));

        let res = repo.create(audiobook_one(AuthorId::new(99999))).await;
        assert!(matches!(res, Err(AppError::ForeignKeyConstraintError(_))));
        Ok(())
    }

    #[sqlx::test]
    async fn partial_update_replaces_only_given_fields(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let conn = ConnectionPool::new(pool);
        let author_id = create_author(&conn, "Author One").await?;
        let repo = AudiobookRepositoryImpl::new(conn);

        let created = repo.create(audiobook_one(author_id)).await?;
        let updated = repo
            .update(UpdateAudiobook {
                audiobook_id: created.id,
                title: Some("Renamed".into()),
                author_id: None,
                narrator_id: None,
                duration: None,
                description: Some(Some("now described".into())),
                release_date: None,
            })
            .await?;
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.duration, 600);
        assert_eq!(updated.author.id, author_id);
        assert_eq!(updated.description.as_deref(), Some("now described"));
        Ok(())
    }

    #[sqlx::test]
    async fn category_links_round_trip(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let conn = ConnectionPool::new(pool);
        let author_id = create_author(&conn, "Author One").await?;
        let category = CategoryRepositoryImpl::new(conn.clone())
            .create(CreateCategory {
                name: "Fiction".into(),
            })
            .await?;
        let repo = AudiobookRepositoryImpl::new(conn);

        let audiobook = repo.create(audiobook_one(author_id)).await?;
        let link = repo
            .add_category(CreateAudiobookCategory {
                audiobook_id: audiobook.id,
                category_id: category.id,
            })
            .await?;
        assert_eq!(link.audiobook_id, audiobook.id);

        let categories = repo.find_categories(audiobook.id).await?;
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Fiction");

        // 存在しないカテゴリーへのリンクは外部キー違反
        let res = repo
            .add_category(CreateAudiobookCategory {
                audiobook_id: audiobook.id,
                category_id: CategoryId::new(99999),
            })
            .await;
        assert!(matches!(res, Err(AppError::ForeignKeyConstraintError(_))));
        Ok(())
    }
}
