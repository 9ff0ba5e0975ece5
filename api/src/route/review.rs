use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::review::{
    delete_review, register_review, show_review, show_review_list, update_review,
};

pub fn build_review_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_review_list).post(register_review))
        .route(
            "/{review_id}",
            get(show_review).put(update_review).delete(delete_review),
        );
    Router::new().nest("/reviews", routers)
}
