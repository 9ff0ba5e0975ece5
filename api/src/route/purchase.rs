use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::purchase::{
    delete_purchase, register_purchase, show_purchase, show_purchase_list, update_purchase,
};

pub fn build_purchase_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_purchase_list).post(register_purchase))
        .route(
            "/{purchase_id}",
            get(show_purchase)
                .put(update_purchase)
                .delete(delete_purchase),
        );
    Router::new().nest("/purchases", routers)
}
