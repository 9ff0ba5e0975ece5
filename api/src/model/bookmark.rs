use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    bookmark::{
        event::{CreateBookmark, UpdateBookmark},
        Bookmark,
    },
    id::{AudiobookId, BookmarkId, ChapterId, UserId},
};
use serde::{Deserialize, Serialize};

use super::double_option;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookmarkRequest {
    #[garde(skip)]
    pub user_id: UserId,
    #[garde(skip)]
    pub audiobook_id: AudiobookId,
    #[garde(skip)]
    pub chapter_id: Option<ChapterId>,
    #[garde(skip)]
    pub position: i32,
}

impl From<CreateBookmarkRequest> for CreateBookmark {
    fn from(value: CreateBookmarkRequest) -> Self {
        let CreateBookmarkRequest {
            user_id,
            audiobook_id,
            chapter_id,
            position,
        } = value;
        Self {
            user_id,
            audiobook_id,
            chapter_id,
            position,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBookmarkRequest {
    #[garde(skip)]
    pub user_id: Option<UserId>,
    #[garde(skip)]
    pub audiobook_id: Option<AudiobookId>,
    #[garde(skip)]
    #[serde(default, deserialize_with = "double_option")]
    pub chapter_id: Option<Option<ChapterId>>,
    #[garde(skip)]
    pub position: Option<i32>,
}

#[derive(new)]
pub struct UpdateBookmarkRequestWithId(BookmarkId, UpdateBookmarkRequest);

impl From<UpdateBookmarkRequestWithId> for UpdateBookmark {
    fn from(value: UpdateBookmarkRequestWithId) -> Self {
        let UpdateBookmarkRequestWithId(bookmark_id, req) = value;
        Self {
            bookmark_id,
            user_id: req.user_id,
            audiobook_id: req.audiobook_id,
            chapter_id: req.chapter_id,
            position: req.position,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookmarkResponse {
    pub bookmark_id: BookmarkId,
    pub user_id: UserId,
    pub audiobook_id: AudiobookId,
    pub chapter_id: Option<ChapterId>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(value: Bookmark) -> Self {
        let Bookmark {
            id,
            user_id,
            audiobook_id,
            chapter_id,
            position,
            created_at,
        } = value;
        Self {
            bookmark_id: id,
            user_id,
            audiobook_id,
            chapter_id,
            position,
            created_at,
        }
    }
}
