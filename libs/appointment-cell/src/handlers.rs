use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::warn;

use shared_database::AppState;
use shared_models::{AppError, EntityId};

use crate::models::{Appointment, UpdateAppointmentRequest};
use crate::services::AppointmentService;

fn appointment_not_found(appointment_id: &EntityId) -> AppError {
    warn!("Appointment {} not found", appointment_id);
    AppError::NotFound(format!("Appointment {} not found", appointment_id))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    Json(appointment): Json<Appointment>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(&state.database);

    let appointment = service.create_appointment(appointment).await?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(&state.database);
    let appointment_id = EntityId::from(appointment_id);

    let appointment = service
        .get_appointment(&appointment_id)
        .await?
        .ok_or_else(|| appointment_not_found(&appointment_id))?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(&state.database);

    let appointments = service.list_appointments().await?;

    Ok(Json(json!({
        "appointments": appointments,
        "total": appointments.len()
    })))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<String>,
    Json(appointment): Json<Appointment>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(&state.database);
    let appointment_id = EntityId::from(appointment_id);

    let appointment = service
        .update_appointment(&appointment_id, appointment)
        .await?
        .ok_or_else(|| appointment_not_found(&appointment_id))?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn patch_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<String>,
    Json(changes): Json<UpdateAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(&state.database);
    let appointment_id = EntityId::from(appointment_id);

    let appointment = service
        .patch_appointment(&appointment_id, changes)
        .await?
        .ok_or_else(|| appointment_not_found(&appointment_id))?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(&state.database);
    let appointment_id = EntityId::from(appointment_id);

    if !service.delete_appointment(&appointment_id).await? {
        return Err(appointment_not_found(&appointment_id));
    }

    Ok(Json(json!({
        "deleted": true,
        "id": appointment_id
    })))
}
