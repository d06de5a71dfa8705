use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put, patch, delete},
};

use shared_database::AppState;

use crate::handlers;

pub fn appointment_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(handlers::create_appointment))
        .route("/", get(handlers::list_appointments))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .route("/{appointment_id}", put(handlers::update_appointment))
        .route("/{appointment_id}", patch(handlers::patch_appointment))
        .route("/{appointment_id}", delete(handlers::delete_appointment))
        .with_state(state)
}
