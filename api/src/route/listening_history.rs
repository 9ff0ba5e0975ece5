use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::listening_history::{
    delete_listening_history, register_listening_history, show_listening_history,
    show_listening_history_list, update_listening_history,
};

pub fn build_listening_history_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route(
            "/",
            get(show_listening_history_list).post(register_listening_history),
        )
        .route(
            "/{history_id}",
            get(show_listening_history)
                .put(update_listening_history)
                .delete(delete_listening_history),
        );
    Router::new().nest("/listening_histories", routers)
}
