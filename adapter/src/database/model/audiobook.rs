use chrono::{DateTime, Utc};
use kernel::model::{
    audiobook::{Audiobook, AudiobookAuthor, AudiobookCategory, AudiobookNarrator},
    id::{AudiobookId, AuthorId, CategoryId, NarratorId},
};
use shared::error::AppError;

// authors / narrators を結合した読み出し用の行
#[derive(sqlx::FromRow)]
pub struct AudiobookRow {
    pub audiobook_id: i64,
    pub title: String,
    pub author_id: i64,
    pub author_name: String,
    pub narrator_id: Option<i64>,
    pub narrator_name: Option<String>,
    pub duration: i32,
    pub description: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<AudiobookRow> for Audiobook {
    type Error = AppError;

    fn try_from(value: AudiobookRow) -> Result<Self, Self::Error> {
        let AudiobookRow {
            audiobook_id,
            title,
            author_id,
            author_name,
            narrator_id,
            narrator_name,
            duration,
            description,
            release_date,
            created_at,
        } = value;
        // LEFT JOIN の結果、id と name は必ず対で現れる
        let narrator = match (narrator_id, narrator_name) {
            (Some(id), Some(name)) => Some(AudiobookNarrator {
                id: NarratorId::new(id),
                name,
            }),
            (None, None) => None,
            _ => {
                return Err(AppError::ConversionEntityError(
                    "audiobook narrator columns are inconsistent".into(),
                ))
            }
        };
        Ok(Self {
            id: AudiobookId::new(audiobook_id),
            title,
            author: AudiobookAuthor {
                id: AuthorId::new(author_id),
                name: author_name,
            },
            narrator,
            duration,
            description,
            release_date,
            created_at,
        })
    }
}

// 部分更新の読み書きに使う、結合なしの素の行
#[derive(sqlx::FromRow)]
pub struct AudiobookRecordRow {
    pub audiobook_id: i64,
    pub title: String,
    pub author_id: i64,
    pub narrator_id: Option<i64>,
    pub duration: i32,
    pub description: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
}

#[derive(sqlx::FromRow)]
pub struct AudiobookCategoryRow {
    pub audiobook_id: i64,
    pub category_id: i64,
}

impl From<AudiobookCategoryRow> for AudiobookCategory {
    fn from(value: AudiobookCategoryRow) -> Self {
        let AudiobookCategoryRow {
            audiobook_id,
            category_id,
        } = value;
        Self {
            audiobook_id: AudiobookId::new(audiobook_id),
            category_id: CategoryId::new(category_id),
        }
    }
}
