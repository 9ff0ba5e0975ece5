use chrono::{DateTime, Utc};

use super::id::{AudiobookId, ChapterId};

pub mod event;

// position は呼び出し側が採番する並び順。重複は妨げない
#[derive(Debug, Clone)]
pub struct Chapter {
    pub id: ChapterId,
    pub audiobook_id: AudiobookId,
    pub title: Option<String>,
    pub duration: i32,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}
