use chrono::{DateTime, Utc};
use kernel::model::{
    chapter::Chapter,
    id::{AudiobookId, ChapterId},
};

#[derive(sqlx::FromRow)]
pub struct ChapterRow {
    pub chapter_id: i64,
    pub audiobook_id: i64,
    pub title: Option<String>,
    pub duration: i32,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

impl From<ChapterRow> for Chapter {
    fn from(value: ChapterRow) -> Self {
        let ChapterRow {
            chapter_id,
            audiobook_id,
            title,
            duration,
            position,
            created_at,
        } = value;
        Self {
            id: ChapterId::new(chapter_id),
            audiobook_id: AudiobookId::new(audiobook_id),
            title,
            duration,
            position,
            created_at,
        }
    }
}
