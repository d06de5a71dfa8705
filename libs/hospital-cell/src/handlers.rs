use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::{AppError, EntityId};

use crate::models::{Hospital, UpdateHospitalRequest};
use crate::services::HospitalService;

fn hospital_not_found(hospital_id: &EntityId) -> AppError {
    AppError::NotFound(format!("Hospital {} not found", hospital_id))
}

#[axum::debug_handler]
pub async fn create_hospital(
    State(state): State<Arc<AppState>>,
    Json(hospital): Json<Hospital>,
) -> Result<Json<Value>, AppError> {
    let service = HospitalService::new(&state.database);

    let hospital = service.create_hospital(hospital).await?;

    Ok(Json(json!(hospital)))
}

#[axum::debug_handler]
pub async fn get_hospital(
    State(state): State<Arc<AppState>>,
    Path(hospital_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = HospitalService::new(&state.database);
    let hospital_id = EntityId::from(hospital_id);

    let hospital = service
        .get_hospital(&hospital_id)
        .await?
        .ok_or_else(|| hospital_not_found(&hospital_id))?;

    Ok(Json(json!(hospital)))
}

#[axum::debug_handler]
pub async fn list_hospitals(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let service = HospitalService::new(&state.database);

    let hospitals = service.list_hospitals().await?;

    Ok(Json(json!({
        "hospitals": hospitals,
        "total": hospitals.len()
    })))
}

#[axum::debug_handler]
pub async fn update_hospital(
    State(state): State<Arc<AppState>>,
    Path(hospital_id): Path<String>,
    Json(hospital): Json<Hospital>,
) -> Result<Json<Value>, AppError> {
    let service = HospitalService::new(&state.database);
    let hospital_id = EntityId::from(hospital_id);

    let hospital = service
        .update_hospital(&hospital_id, hospital)
        .await?
        .ok_or_else(|| hospital_not_found(&hospital_id))?;

    Ok(Json(json!(hospital)))
}

#[axum::debug_handler]
pub async fn patch_hospital(
    State(state): State<Arc<AppState>>,
    Path(hospital_id): Path<String>,
    Json(changes): Json<UpdateHospitalRequest>,
) -> Result<Json<Value>, AppError> {
    let service = HospitalService::new(&state.database);
    let hospital_id = EntityId::from(hospital_id);

    let hospital = service
        .patch_hospital(&hospital_id, changes)
        .await?
        .ok_or_else(|| hospital_not_found(&hospital_id))?;

    Ok(Json(json!(hospital)))
}

#[axum::debug_handler]
pub async fn delete_hospital(
    State(state): State<Arc<AppState>>,
    Path(hospital_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = HospitalService::new(&state.database);
    let hospital_id = EntityId::from(hospital_id);

    if !service.delete_hospital(&hospital_id).await? {
        return Err(hospital_not_found(&hospital_id));
    }

    Ok(Json(json!({
        "deleted": true,
        "id": hospital_id
    })))
}
