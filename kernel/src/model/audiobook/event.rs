use chrono::{DateTime, Utc};

use crate::model::id::{AudiobookId, AuthorId, CategoryId, NarratorId};

#[derive(Debug)]
pub struct CreateAudiobook {
    pub title: String,
    pub author_id: AuthorId,
    pub narrator_id: Option<NarratorId>,
    pub duration: i32,
    pub description: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
}

// 埋め込み著者を含むモデルには apply できないため、
// このイベントの適用はリポジトリ実装側でカラム単位に行う
#[derive(Debug)]
pub struct UpdateAudiobook {
    pub audiobook_id: AudiobookId,
    pub title: Option<String>,
    pub author_id: Option<AuthorId>,
    pub narrator_id: Option<Option<NarratorId>>,
    pub duration: Option<i32>,
    pub description: Option<Option<String>>,
    pub release_date: Option<Option<DateTime<Utc>>>,
}

#[derive(Debug)]
pub struct DeleteAudiobook {
    pub audiobook_id: AudiobookId,
}

#[derive(Debug)]
pub struct CreateAudiobookCategory {
    pub audiobook_id: AudiobookId,
    pub category_id: CategoryId,
}
