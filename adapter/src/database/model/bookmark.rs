use chrono::{DateTime, Utc};
use kernel::model::{
    bookmark::Bookmark,
    id::{AudiobookId, BookmarkId, ChapterId, UserId},
};

#[derive(sqlx::FromRow)]
pub struct BookmarkRow {
    pub bookmark_id: i64,
    pub user_id: i64,
    pub audiobook_id: i64,
    pub chapter_id: Option<i64>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

impl From<BookmarkRow> for Bookmark {
    fn from(value: BookmarkRow) -> Self {
        let BookmarkRow {
            bookmark_id,
            user_id,
            audiobook_id,
            chapter_id,
            position,
            created_at,
        } = value;
        Self {
            id: BookmarkId::new(bookmark_id),
            user_id: UserId::new(user_id),
            audiobook_id: AudiobookId::new(audiobook_id),
            chapter_id: chapter_id.map(ChapterId::new),
            position,
            created_at,
        }
    }
}
