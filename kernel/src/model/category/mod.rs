use chrono::{DateTime, Utc};

use super::id::CategoryId;

pub mod event;

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
