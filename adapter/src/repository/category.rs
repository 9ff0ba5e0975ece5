use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        category::{
            event::{CreateCategory, DeleteCategory, UpdateCategory},
            Category,
        },
        id::CategoryId,
        list::ListOptions,
    },
    repository::category::CategoryRepository,
};
use shared::error::{AppError, AppResult};

use crate::{
    database::{model::category::CategoryRow, ConnectionPool},
    repository::map_constraint_error,
};

#[derive(new)]
pub struct CategoryRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryImpl {
    async fn create(&self, event: CreateCategory) -> AppResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name)
             VALUES ($1)
             RETURNING category_id, name, created_at",
        )
        .bind(&event.name)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| map_constraint_error(e, "category"))?;
        Ok(row.into())
    }

    async fn find_by_id(&self, category_id: CategoryId) -> AppResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT category_id, name, created_at FROM categories WHERE category_id = $1",
        )
        .bind(category_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(Category::from))
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT category_id, name, created_at
             FROM categories
             ORDER BY category_id
             LIMIT $1 OFFSET $2",
        )
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn update(&self, event: UpdateCategory) -> AppResult<Category> {
        let mut tx = self.db.begin().await?;
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT category_id, name, created_at FROM categories WHERE category_id = $1",
        )
        .bind(event.category_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound("Category not found".into()))?;

        let category = event.apply(Category::from(row));
        let res = sqlx::query("UPDATE categories SET name = $1 WHERE category_id = $2")
            .bind(&category.name)
            .bind(category.id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_constraint_error(e, "category"))?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowAffectedError(
                "no category has been updated".into(),
            ));
        }
        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(category)
    }

    async fn delete(&self, event: DeleteCategory) -> AppResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "DELETE FROM categories
             WHERE category_id = $1
             RETURNING category_id, name, created_at",
        )
        .bind(event.category_id.into_inner())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(|e| map_constraint_error(e, "category"))?;
        row.map(Category::from)
            .ok_or_else(|| AppError::EntityNotFound("Category not found".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test]
    async fn duplicate_name_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = CategoryRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateCategory {
            name: "Fiction".into(),
        })
        .await?;
        let res = repo
            .create(CreateCategory {
                name: "Fiction".into(),
            })
            .await;
        assert!(matches!(res, Err(AppError::UniqueConstraintError(_))));
        Ok(())
    }

    #[sqlx::test]
    async fn missing_category_is_not_found(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = CategoryRepositoryImpl::new(ConnectionPool::new(pool));

        assert!(repo.find_by_id(CategoryId::new(99999)).await?.is_none());
        Ok(())
    }
}
