use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::rating::{
    delete_rating, register_rating, show_rating, show_rating_list, update_rating,
};

pub fn build_rating_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_rating_list).post(register_rating))
        .route(
            "/{rating_id}",
            get(show_rating).put(update_rating).delete(delete_rating),
        );
    Router::new().nest("/ratings", routers)
}
