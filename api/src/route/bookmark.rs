use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::bookmark::{
    delete_bookmark, register_bookmark, show_bookmark, show_bookmark_list, update_bookmark,
};

pub fn build_bookmark_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_bookmark_list).post(register_bookmark))
        .route(
            "/{bookmark_id}",
            get(show_bookmark)
                .put(update_bookmark)
                .delete(delete_bookmark),
        );
    Router::new().nest("/bookmarks", routers)
}
