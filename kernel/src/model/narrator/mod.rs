use chrono::{DateTime, Utc};

use super::id::NarratorId;

pub mod event;

#[derive(Debug, Clone)]
pub struct Narrator {
    pub id: NarratorId,
    pub name: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}
