use chrono::{DateTime, Utc};
use kernel::model::{id::NarratorId, narrator::Narrator};

#[derive(sqlx::FromRow)]
pub struct NarratorRow {
    pub narrator_id: i64,
    pub name: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<NarratorRow> for Narrator {
    fn from(value: NarratorRow) -> Self {
        let NarratorRow {
            narrator_id,
            name,
            bio,
            created_at,
        } = value;
        Self {
            id: NarratorId::new(narrator_id),
            name,
            bio,
            created_at,
        }
    }
}
