use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    audiobook::{
        event::{CreateAudiobook, CreateAudiobookCategory, UpdateAudiobook},
        Audiobook, AudiobookAuthor, AudiobookCategory, AudiobookNarrator,
    },
    id::{AudiobookId, AuthorId, CategoryId, NarratorId},
};
use serde::{Deserialize, Serialize};

use super::double_option;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAudiobookRequest {
    #[garde(length(min = 1, max = 255))]
    pub title: String,
    #[garde(skip)]
    pub author_id: AuthorId,
    #[garde(skip)]
    pub narrator_id: Option<NarratorId>,
    #[garde(range(min = 1))]
    pub duration: i32,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(skip)]
    pub release_date: Option<DateTime<Utc>>,
}

impl From<CreateAudiobookRequest> for CreateAudiobook {
    fn from(value: CreateAudiobookRequest) -> Self {
        let CreateAudiobookRequest {
            title,
            author_id,
            narrator_id,
            duration,
            description,
            release_date,
        } = value;
        Self {
            title,
            author_id,
            narrator_id,
            duration,
            description,
            release_date,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAudiobookRequest {
    #[garde(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[garde(skip)]
    pub author_id: Option<AuthorId>,
    #[garde(skip)]
    #[serde(default, deserialize_with = "double_option")]
    pub narrator_id: Option<Option<NarratorId>>,
    #[garde(range(min = 1))]
    pub duration: Option<i32>,
    #[garde(skip)]
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[garde(skip)]
    #[serde(default, deserialize_with = "double_option")]
    pub release_date: Option<Option<DateTime<Utc>>>,
}

#[derive(new)]
pub struct UpdateAudiobookRequestWithId(AudiobookId, UpdateAudiobookRequest);

impl From<UpdateAudiobookRequestWithId> for UpdateAudiobook {
    fn from(value: UpdateAudiobookRequestWithId) -> Self {
        let UpdateAudiobookRequestWithId(audiobook_id, req) = value;
        Self {
            audiobook_id,
            title: req.title,
            author_id: req.author_id,
            narrator_id: req.narrator_id,
            duration: req.duration,
            description: req.description,
            release_date: req.release_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AudiobookResponse {
    pub audiobook_id: AudiobookId,
    pub title: String,
    pub author_id: AuthorId,
    pub narrator_id: Option<NarratorId>,
    pub duration: i32,
    pub description: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub author: AudiobookAuthorResponse,
    pub narrator: Option<AudiobookNarratorResponse>,
}

impl From<Audiobook> for AudiobookResponse {
    fn from(value: Audiobook) -> Self {
        let Audiobook {
            id,
            title,
            author,
            narrator,
            duration,
            description,
            release_date,
            created_at,
        } = value;
        Self {
            audiobook_id: id,
            title,
            author_id: author.id,
            narrator_id: narrator.as_ref().map(|n| n.id),
            duration,
            description,
            release_date,
            created_at,
            author: author.into(),
            narrator: narrator.map(AudiobookNarratorResponse::from),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AudiobookAuthorResponse {
    pub author_id: AuthorId,
    pub name: String,
}

impl From<AudiobookAuthor> for AudiobookAuthorResponse {
    fn from(value: AudiobookAuthor) -> Self {
        let AudiobookAuthor { id, name } = value;
        Self {
            author_id: id,
            name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AudiobookNarratorResponse {
    pub narrator_id: NarratorId,
    pub name: String,
}

impl From<AudiobookNarrator> for AudiobookNarratorResponse {
    fn from(value: AudiobookNarrator) -> Self {
        let AudiobookNarrator { id, name } = value;
        Self {
            narrator_id: id,
            name,
        }
    }
}

// /audiobooks/{audiobook_id}/categories に POST するリクエスト
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAudiobookCategoryRequest {
    #[garde(skip)]
    pub category_id: CategoryId,
}

#[derive(new)]
pub struct CreateAudiobookCategoryRequestWithId(AudiobookId, CreateAudiobookCategoryRequest);

impl From<CreateAudiobookCategoryRequestWithId> for CreateAudiobookCategory {
    fn from(value: CreateAudiobookCategoryRequestWithId) -> Self {
        let CreateAudiobookCategoryRequestWithId(audiobook_id, req) = value;
        Self {
            audiobook_id,
            category_id: req.category_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AudiobookCategoryResponse {
    pub audiobook_id: AudiobookId,
    pub category_id: CategoryId,
}

impl From<AudiobookCategory> for AudiobookCategoryResponse {
    fn from(value: AudiobookCategory) -> Self {
        let AudiobookCategory {
            audiobook_id,
            category_id,
        } = value;
        Self {
            audiobook_id,
            category_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrator_can_be_detached_with_explicit_null() {
        let req: UpdateAudiobookRequest =
            serde_json::from_str(r#"{"narrator_id": null}"#).unwrap();
        assert_eq!(req.narrator_id, Some(None));
        assert_eq!(req.title, None);
        assert_eq!(req.description, None);
    }

    #[test]
    fn zero_duration_fails_validation() {
        let req: CreateAudiobookRequest = serde_json::from_str(
            r#"{"title": "Audiobook One", "author_id": 1, "duration": 0}"#,
        )
        .unwrap();
        assert!(req.validate(&()).is_err());
    }
}
