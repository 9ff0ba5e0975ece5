use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::user::{
    delete_user, register_user, show_user, show_user_list, show_user_subscription_list,
    subscribe_user, update_user,
};

pub fn build_user_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_user_list).post(register_user))
        .route(
            "/{user_id}",
            get(show_user).put(update_user).delete(delete_user),
        )
        .route(
            "/{user_id}/subscriptions",
            get(show_user_subscription_list).post(subscribe_user),
        );
    Router::new().nest("/users", routers)
}
