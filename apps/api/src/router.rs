use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use admin_cell::admin_routes;
use appointment_cell::appointment_routes;
use doctor_cell::doctor_routes;
use hospital_cell::hospital_routes;
use patient_cell::patient_routes;
use rating_cell::rating_routes;
use shared_database::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "MediLink API is running!" }))
        .nest("/admin", admin_routes(state.clone()))
        .nest("/doctor", doctor_routes(state.clone()))
        .nest("/patient", patient_routes(state.clone()))
        .nest("/hospital", hospital_routes(state.clone()))
        .nest("/appointment", appointment_routes(state.clone()))
        .nest("/rating", rating_routes(state))
}
