use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::category::{
    delete_category, register_category, show_category, show_category_list, update_category,
};

pub fn build_category_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_category_list).post(register_category))
        .route(
            "/{category_id}",
            get(show_category)
                .put(update_category)
                .delete(delete_category),
        );
    Router::new().nest("/categories", routers)
}
