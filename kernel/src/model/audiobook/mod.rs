use chrono::{DateTime, Utc};

use super::id::{AudiobookId, AuthorId, CategoryId, NarratorId};

pub mod event;

#[derive(Debug, Clone)]
pub struct Audiobook {
    pub id: AudiobookId,
    pub title: String,
    pub author: AudiobookAuthor,
    pub narrator: Option<AudiobookNarrator>,
    pub duration: i32,
    pub description: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

// 読み出し時に埋め込む著者・ナレーターへの参照
#[derive(Debug, Clone)]
pub struct AudiobookAuthor {
    pub id: AuthorId,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct AudiobookNarrator {
    pub id: NarratorId,
    pub name: String,
}

// audiobooks と categories を結ぶリンク行
#[derive(Debug, Clone)]
pub struct AudiobookCategory {
    pub audiobook_id: AudiobookId,
    pub category_id: CategoryId,
}
