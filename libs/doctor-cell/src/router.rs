use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put, patch, delete},
};

use shared_database::AppState;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(handlers::create_doctor))
        .route("/", get(handlers::list_doctors))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .route("/{doctor_id}", put(handlers::update_doctor))
        .route("/{doctor_id}", patch(handlers::patch_doctor))
        .route("/{doctor_id}", delete(handlers::delete_doctor))
        .with_state(state)
}
