use super::Bookmark;
use crate::model::id::{AudiobookId, BookmarkId, ChapterId, UserId};

#[derive(Debug)]
pub struct CreateBookmark {
    pub user_id: UserId,
    pub audiobook_id: AudiobookId,
    pub chapter_id: Option<ChapterId>,
    pub position: i32,
}

#[derive(Debug)]
pub struct UpdateBookmark {
    pub bookmark_id: BookmarkId,
    pub user_id: Option<UserId>,
    pub audiobook_id: Option<AudiobookId>,
    pub chapter_id: Option<Option<ChapterId>>,
    pub position: Option<i32>,
}

impl UpdateBookmark {
    pub fn apply(self, current: Bookmark) -> Bookmark {
        Bookmark {
            user_id: self.user_id.unwrap_or(current.user_id),
            audiobook_id: self.audiobook_id.unwrap_or(current.audiobook_id),
            chapter_id: self.chapter_id.unwrap_or(current.chapter_id),
            position: self.position.unwrap_or(current.position),
            ..current
        }
    }
}

#[derive(Debug)]
pub struct DeleteBookmark {
    pub bookmark_id: BookmarkId,
}
