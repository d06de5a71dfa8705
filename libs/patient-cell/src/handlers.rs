use std::sync::Arc;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::{AppError, EntityId};

use crate::models::{Patient, UpdatePatientRequest};
use crate::services::PatientService;

#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<Arc<AppState>>,
    Json(request): Json<Patient>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(&state.database);

    let patient = service.create_patient(request).await?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<Arc<AppState>>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(&state.database);

    let patient = service.get_patient(&EntityId::from(patient_id.as_str()))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Patient {} not found", patient_id)))?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn list_patients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(&state.database);

    let patients = service.list_patients().await?;

    Ok(Json(json!({
        "patients": patients,
        "total": patients.len()
    })))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(state): State<Arc<AppState>>,
    Path(patient_id): Path<String>,
    Json(request): Json<Patient>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(&state.database);

    let patient = service.update_patient(&EntityId::from(patient_id.as_str()), request)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Patient {} not found", patient_id)))?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn patch_patient(
    State(state): State<Arc<AppState>>,
    Path(patient_id): Path<String>,
    Json(request): Json<UpdatePatientRequest>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(&state.database);

    let patient = service.patch_patient(&EntityId::from(patient_id.as_str()), request)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Patient {} not found", patient_id)))?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn delete_patient(
    State(state): State<Arc<AppState>>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(&state.database);

    let deleted = service.delete_patient(&EntityId::from(patient_id.as_str())).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Patient {} not found", patient_id)));
    }

    Ok(Json(json!({
        "deleted": true,
        "id": patient_id
    })))
}
