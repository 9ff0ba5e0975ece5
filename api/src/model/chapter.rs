use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    chapter::{
        event::{CreateChapter, UpdateChapter},
        Chapter,
    },
    id::{AudiobookId, ChapterId},
};
use serde::{Deserialize, Serialize};

use super::double_option;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateChapterRequest {
    #[garde(skip)]
    pub audiobook_id: AudiobookId,
    #[garde(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[garde(skip)]
    pub duration: i32,
    #[garde(skip)]
    pub position: i32,
}

impl From<CreateChapterRequest> for CreateChapter {
    fn from(value: CreateChapterRequest) -> Self {
        let CreateChapterRequest {
            audiobook_id,
            title,
            duration,
            position,
        } = value;
        Self {
            audiobook_id,
            title,
            duration,
            position,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateChapterRequest {
    #[garde(skip)]
    pub audiobook_id: Option<AudiobookId>,
    #[garde(skip)]
    #[serde(default, deserialize_with = "double_option")]
    pub title: Option<Option<String>>,
    #[garde(skip)]
    pub duration: Option<i32>,
    #[garde(skip)]
    pub position: Option<i32>,
}

#[derive(new)]
pub struct UpdateChapterRequestWithId(ChapterId, UpdateChapterRequest);

impl From<UpdateChapterRequestWithId> for UpdateChapter {
    fn from(value: UpdateChapterRequestWithId) -> Self {
        let UpdateChapterRequestWithId(chapter_id, req) = value;
        Self {
            chapter_id,
            audiobook_id: req.audiobook_id,
            title: req.title,
            duration: req.duration,
            position: req.position,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChapterResponse {
    pub chapter_id: ChapterId,
    pub audiobook_id: AudiobookId,
    pub title: Option<String>,
    pub duration: i32,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Chapter> for ChapterResponse {
    fn from(value: Chapter) -> Self {
        let Chapter {
            id,
            audiobook_id,
            title,
            duration,
            position,
            created_at,
        } = value;
        Self {
            chapter_id: id,
            audiobook_id,
            title,
            duration,
            position,
            created_at,
        }
    }
}
