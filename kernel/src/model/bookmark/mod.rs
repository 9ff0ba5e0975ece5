use chrono::{DateTime, Utc};

use super::id::{AudiobookId, BookmarkId, ChapterId, UserId};

pub mod event;

// position は作品先頭からの秒数
#[derive(Debug, Clone)]
pub struct Bookmark {
    pub id: BookmarkId,
    pub user_id: UserId,
    pub audiobook_id: AudiobookId,
    pub chapter_id: Option<ChapterId>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}
