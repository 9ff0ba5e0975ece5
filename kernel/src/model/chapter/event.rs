use super::Chapter;
use crate::model::id::{AudiobookId, ChapterId};

#[derive(Debug)]
pub struct CreateChapter {
    pub audiobook_id: AudiobookId,
    pub title: Option<String>,
    pub duration: i32,
    pub position: i32,
}

#[derive(Debug)]
pub struct UpdateChapter {
    pub chapter_id: ChapterId,
    pub audiobook_id: Option<AudiobookId>,
    pub title: Option<Option<String>>,
    pub duration: Option<i32>,
    pub position: Option<i32>,
}

impl UpdateChapter {
    pub fn apply(self, current: Chapter) -> Chapter {
        Chapter {
            audiobook_id: self.audiobook_id.unwrap_or(current.audiobook_id),
            title: self.title.unwrap_or(current.title),
            duration: self.duration.unwrap_or(current.duration),
            position: self.position.unwrap_or(current.position),
            ..current
        }
    }
}

#[derive(Debug)]
pub struct DeleteChapter {
    pub chapter_id: ChapterId,
}
