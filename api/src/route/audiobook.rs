use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::audiobook::{
    add_audiobook_category, delete_audiobook, register_audiobook, show_audiobook,
    show_audiobook_category_list, show_audiobook_list, update_audiobook,
};

pub fn build_audiobook_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_audiobook_list).post(register_audiobook))
        .route(
            "/{audiobook_id}",
            get(show_audiobook)
                .put(update_audiobook)
                .delete(delete_audiobook),
        )
        .route(
            "/{audiobook_id}/categories",
            get(show_audiobook_category_list).post(add_audiobook_category),
        );
    Router::new().nest("/audiobooks", routers)
}
