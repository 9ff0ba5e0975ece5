use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        author::{
            event::{CreateAuthor, DeleteAuthor, UpdateAuthor},
            Author,
        },
        id::AuthorId,
        list::ListOptions,
    },
    repository::author::AuthorRepository,
};
use shared::error::{AppError, AppResult};

use crate::{
    database::{model::author::AuthorRow, ConnectionPool},
    repository::map_constraint_error,
};

#[derive(new)]
pub struct AuthorRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AuthorRepository for AuthorRepositoryImpl {
    async fn create(&self, event: CreateAuthor) -> AppResult<Author> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "INSERT INTO authors (name, bio)
             VALUES ($1, $2)
             RETURNING author_id, name, bio, created_at",
        )
        .bind(&event.name)
        .bind(&event.bio)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| map_constraint_error(e, "author"))?;
        Ok(row.into())
    }

    async fn find_by_id(&self, author_id: AuthorId) -> AppResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "SELECT author_id, name, bio, created_at FROM authors WHERE author_id = $1",
        )
        .bind(author_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(Author::from))
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            "SELECT author_id, name, bio, created_at
             FROM authors
             ORDER BY author_id
             LIMIT $1 OFFSET $2",
        )
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn update(&self, event: UpdateAuthor) -> AppResult<Author> {
        let mut tx = self.db.begin().await?;
        let row = sqlx::query_as::<_, AuthorRow>(
            "SELECT author_id, name, bio, created_at FROM authors WHERE author_id = $1",
        )
        .bind(event.author_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound("Author not found".into()))?;

        let author = event.apply(Author::from(row));
        let res = sqlx::query("UPDATE authors SET name = $1, bio = $2 WHERE author_id = $3")
            .bind(&author.name)
            .bind(&author.bio)
            .bind(author.id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowAffectedError(
                "no author has been updated".into(),
            ));
        }
        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(author)
    }

    async fn delete(&self, event: DeleteAuthor) -> AppResult<Author> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "DELETE FROM authors
             WHERE author_id = $1
             RETURNING author_id, name, bio, created_at",
        )
        .bind(event.author_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(|e| map_constraint_error(e, "author"))?;
        row.map(Author::from)
            .ok_or_else(|| AppError::EntityNotFound("Author not found".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test]
    async fn register_then_fetch_author(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = AuthorRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo
            .create(CreateAuthor {
                name: "Author One".into(),
                bio: Some("A bio".into()),
            })
            .await?;
        let found = repo
            .find_by_id(created.id)
            .await?
            .expect("author must exist");
        assert_eq!(found.name, "Author One");
        assert_eq!(found.bio.as_deref(), Some("A bio"));
        Ok(())
    }

    #[sqlx::test]
    async fn explicit_null_clears_bio(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = AuthorRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo
            .create(CreateAuthor {
                name: "Author One".into(),
                bio: Some("A bio".into()),
            })
            .await?;
        let updated = repo
            .update(UpdateAuthor {
                author_id: created.id,
                name: None,
                bio: Some(None),
            })
            .await?;
        assert_eq!(updated.name, "Author One");
        assert_eq!(updated.bio, None);

        // 書き戻された値が永続化されていること
        let found = repo
            .find_by_id(created.id)
            .await?
            .expect("author must exist");
        assert_eq!(found.bio, None);
        Ok(())
    }

    #[sqlx::test]
    async fn list_returns_insertion_order(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = AuthorRepositoryImpl::new(ConnectionPool::new(pool));

        for name in ["a", "b", "c"] {
            repo.create(CreateAuthor {
                name: name.into(),
                bio: None,
            })
            .await?;
        }
        let page = repo
            .find_all(ListOptions {
                limit: 2,
                offset: 1,
            })
            .await?;
        assert_eq!(
            page.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
            vec!["b", "c"]
        );
        Ok(())
    }

    #[sqlx::test]
    async fn delete_returns_previous_record(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = AuthorRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo
            .create(CreateAuthor {
                name: "Author One".into(),
                bio: None,
            })
            .await?;
        let deleted = repo
            .delete(DeleteAuthor {
                author_id: created.id,
            })
            .await?;
        assert_eq!(deleted.name, "Author One");
        assert!(repo.find_by_id(created.id).await?.is_none());
        Ok(())
    }
}
