use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::subscription::{
    delete_subscription, register_subscription, show_subscription, show_subscription_list,
    update_subscription,
};

pub fn build_subscription_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_subscription_list).post(register_subscription))
        .route(
            "/{subscription_id}",
            get(show_subscription)
                .put(update_subscription)
                .delete(delete_subscription),
        );
    Router::new().nest("/subscriptions", routers)
}
