use axum::Router;
use registry::AppRegistry;

pub mod audiobook;
pub mod author;
pub mod bookmark;
pub mod category;
pub mod chapter;
pub mod health;
pub mod listening_history;
pub mod narrator;
pub mod purchase;
pub mod rating;
pub mod review;
pub mod subscription;
pub mod user;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(health::build_health_check_routers())
        .merge(user::build_user_routers())
        .merge(subscription::build_subscription_routers())
        .merge(author::build_author_routers())
        .merge(narrator::build_narrator_routers())
        .merge(audiobook::build_audiobook_routers())
        .merge(chapter::build_chapter_routers())
        .merge(category::build_category_routers())
        .merge(listening_history::build_listening_history_routers())
        .merge(bookmark::build_bookmark_routers())
        .merge(review::build_review_routers())
        .merge(rating::build_rating_routers())
        .merge(purchase::build_purchase_routers())
}
