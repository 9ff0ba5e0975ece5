use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::chapter::{
    delete_chapter, register_chapter, show_chapter, show_chapter_list, update_chapter,
};

pub fn build_chapter_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_chapter_list).post(register_chapter))
        .route(
            "/{chapter_id}",
            get(show_chapter).put(update_chapter).delete(delete_chapter),
        );
    Router::new().nest("/chapters", routers)
}
