use std::sync::Arc;

use adapter::{
    database::ConnectionPool,
    repository::{
        audiobook::AudiobookRepositoryImpl, author::AuthorRepositoryImpl,
        bookmark::BookmarkRepositoryImpl, category::CategoryRepositoryImpl,
        chapter::ChapterRepositoryImpl, health::HealthCheckRepositoryImpl,
        listening_history::ListeningHistoryRepositoryImpl, narrator::NarratorRepositoryImpl,
        purchase::PurchaseRepositoryImpl, rating::RatingRepositoryImpl,
        review::ReviewRepositoryImpl, subscription::SubscriptionRepositoryImpl,
        user::UserRepositoryImpl,
    },
};
use derive_new::new;
use kernel::repository::{
    audiobook::AudiobookRepository, author::AuthorRepository, bookmark::BookmarkRepository,
    category::CategoryRepository, chapter::ChapterRepository, health::HealthCheckRepository,
    listening_history::ListeningHistoryRepository, narrator::NarratorRepository,
    purchase::PurchaseRepository, rating::RatingRepository, review::ReviewRepository,
    subscription::SubscriptionRepository, user::UserRepository,
};

// DI コンテナ。テストでは new にモックを渡して組み立てる
#[derive(Clone, new)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    subscription_repository: Arc<dyn SubscriptionRepository>,
    author_repository: Arc<dyn AuthorRepository>,
    narrator_repository: Arc<dyn NarratorRepository>,
    audiobook_repository: Arc<dyn AudiobookRepository>,
    chapter_repository: Arc<dyn ChapterRepository>,
    category_repository: Arc<dyn CategoryRepository>,
    listening_history_repository: Arc<dyn ListeningHistoryRepository>,
    bookmark_repository: Arc<dyn BookmarkRepository>,
    review_repository: Arc<dyn ReviewRepository>,
    rating_repository: Arc<dyn RatingRepository>,
    purchase_repository: Arc<dyn PurchaseRepository>,
}

impl AppRegistry {
    pub fn from_pool(pool: ConnectionPool) -> Self {
        Self::new(
            Arc::new(HealthCheckRepositoryImpl::new(pool.clone())),
            Arc::new(UserRepositoryImpl::new(pool.clone())),
            Arc::new(SubscriptionRepositoryImpl::new(pool.clone())),
            Arc::new(AuthorRepositoryImpl::new(pool.clone())),
            Arc::new(NarratorRepositoryImpl::new(pool.clone())),
            Arc::new(AudiobookRepositoryImpl::new(pool.clone())),
            Arc::new(ChapterRepositoryImpl::new(pool.clone())),
            Arc::new(CategoryRepositoryImpl::new(pool.clone())),
            Arc::new(ListeningHistoryRepositoryImpl::new(pool.clone())),
            Arc::new(BookmarkRepositoryImpl::new(pool.clone())),
            Arc::new(ReviewRepositoryImpl::new(pool.clone())),
            Arc::new(RatingRepositoryImpl::new(pool.clone())),
            Arc::new(PurchaseRepositoryImpl::new(pool)),
        )
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn subscription_repository(&self) -> Arc<dyn SubscriptionRepository> {
        self.subscription_repository.clone()
    }

    pub fn author_repository(&self) -> Arc<dyn AuthorRepository> {
        self.author_repository.clone()
    }

    pub fn narrator_repository(&self) -> Arc<dyn NarratorRepository> {
        self.narrator_repository.clone()
    }

    pub fn audiobook_repository(&self) -> Arc<dyn AudiobookRepository> {
        self.audiobook_repository.clone()
    }

    pub fn chapter_repository(&self) -> Arc<dyn ChapterRepository> {
        self.chapter_repository.clone()
    }

    pub fn category_repository(&self) -> Arc<dyn CategoryRepository> {
        self.category_repository.clone()
    }

    pub fn listening_history_repository(&self) -> Arc<dyn ListeningHistoryRepository> {
        self.listening_history_repository.clone()
    }

    pub fn bookmark_repository(&self) -> Arc<dyn BookmarkRepository> {
        self.bookmark_repository.clone()
    }

    pub fn review_repository(&self) -> Arc<dyn ReviewRepository> {
        self.review_repository.clone()
    }

    pub fn rating_repository(&self) -> Arc<dyn RatingRepository> {
        self.rating_repository.clone()
    }

    pub fn purchase_repository(&self) -> Arc<dyn PurchaseRepository> {
        self.purchase_repository.clone()
    }
}
