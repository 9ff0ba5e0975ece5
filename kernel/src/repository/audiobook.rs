use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    audiobook::{
        event::{CreateAudiobook, CreateAudiobookCategory, DeleteAudiobook, UpdateAudiobook},
        Audiobook, AudiobookCategory,
    },
    category::Category,
    id::AudiobookId,
    list::ListOptions,
};

#[mockall::automock]
#[async_trait]
pub trait AudiobookRepository: Send + Sync {
    async fn create(&self, event: CreateAudiobook) -> AppResult<Audiobook>;
    async fn find_by_id(&self, audiobook_id: AudiobookId) -> AppResult<Option<Audiobook>>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Audiobook>>;
    async fn update(&self, event: UpdateAudiobook) -> AppResult<Audiobook>;
    async fn delete(&self, event: DeleteAudiobook) -> AppResult<Audiobook>;

    // カテゴリーとのリンク行の作成・取得
    async fn add_category(&self, event: CreateAudiobookCategory) -> AppResult<AudiobookCategory>;
    async fn find_categories(&self, audiobook_id: AudiobookId) -> AppResult<Vec<Category>>;
}
