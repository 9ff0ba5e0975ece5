use chrono::{DateTime, Utc};
use kernel::model::{category::Category, id::CategoryId};

#[derive(sqlx::FromRow)]
pub struct CategoryRow {
    pub category_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(value: CategoryRow) -> Self {
        let CategoryRow {
            category_id,
            name,
            created_at,
        } = value;
        Self {
            id: CategoryId::new(category_id),
            name,
            created_at,
        }
    }
}
