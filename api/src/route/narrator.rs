use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::narrator::{
    register_narrator, show_narrator, show_narrator_list, update_narrator,
};

// ナレーターに DELETE ルートはない
pub fn build_narrator_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_narrator_list).post(register_narrator))
        .route("/{narrator_id}", get(show_narrator).put(update_narrator));
    Router::new().nest("/narrators", routers)
}
