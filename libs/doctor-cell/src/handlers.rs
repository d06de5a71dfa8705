use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::{AppError, EntityId};

use crate::models::{Doctor, UpdateDoctorRequest};
use crate::services::DoctorService;

fn doctor_not_found(doctor_id: &EntityId) -> AppError {
    AppError::NotFound(format!("Doctor {} not found", doctor_id))
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<Arc<AppState>>,
    Json(doctor): Json<Doctor>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(&state.database);

    let doctor = service.create_doctor(doctor).await?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(&state.database);
    let doctor_id = EntityId::from(doctor_id);

    let doctor = service
        .get_doctor(&doctor_id)
        .await?
        .ok_or_else(|| doctor_not_found(&doctor_id))?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(&state.database);

    let doctors = service.list_doctors().await?;

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<String>,
    Json(doctor): Json<Doctor>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(&state.database);
    let doctor_id = EntityId::from(doctor_id);

    let doctor = service
        .update_doctor(&doctor_id, doctor)
        .await?
        .ok_or_else(|| doctor_not_found(&doctor_id))?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn patch_doctor(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<String>,
    Json(changes): Json<UpdateDoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(&state.database);
    let doctor_id = EntityId::from(doctor_id);

    let doctor = service
        .patch_doctor(&doctor_id, changes)
        .await?
        .ok_or_else(|| doctor_not_found(&doctor_id))?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(&state.database);
    let doctor_id = EntityId::from(doctor_id);

    if !service.delete_doctor(&doctor_id).await? {
        return Err(doctor_not_found(&doctor_id));
    }

    Ok(Json(json!({
        "deleted": true,
        "id": doctor_id
    })))
}
