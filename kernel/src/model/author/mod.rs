use chrono::{DateTime, Utc};

use super::id::AuthorId;

pub mod event;

#[derive(Debug, Clone)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}
