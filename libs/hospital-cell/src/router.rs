use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_database::AppState;

use crate::handlers;

pub fn hospital_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(handlers::create_hospital).get(handlers::list_hospitals))
        .route(
            "/{hospital_id}",
            get(handlers::get_hospital)
                .put(handlers::update_hospital)
                .patch(handlers::patch_hospital)
                .delete(handlers::delete_hospital),
        )
        .with_state(state)
}
