use std::sync::Arc;
use axum::{routing::{get, post, put, patch, delete}, Router};
use shared_database::AppState;

use crate::handlers::*;

pub fn patient_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(create_patient))
        .route("/", get(list_patients))
        .route("/{id}", get(get_patient))
        .route("/{id}", put(update_patient))
        .route("/{id}", patch(patch_patient))
        .route("/{id}", delete(delete_patient))
        .with_state(state)
}
