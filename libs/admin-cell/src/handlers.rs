use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::{AppError, EntityId};

use crate::models::{Admin, UpdateAdminRequest};
use crate::services::AdminService;

fn not_found(admin_id: &EntityId) -> AppError {
    AppError::NotFound(format!("Admin {} not found", admin_id))
}

#[axum::debug_handler]
pub async fn create_admin(
    State(state): State<Arc<AppState>>,
    Json(admin): Json<Admin>,
) -> Result<Json<Value>, AppError> {
    let service = AdminService::new(&state.database);

    let admin = service.create_admin(admin).await?;

    Ok(Json(json!(admin)))
}

#[axum::debug_handler]
pub async fn get_admin(
    State(state): State<Arc<AppState>>,
    Path(admin_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = AdminService::new(&state.database);
    let admin_id = EntityId::from(admin_id);

    let admin = service
        .get_admin(&admin_id)
        .await?
        .ok_or_else(|| not_found(&admin_id))?;

    Ok(Json(json!(admin)))
}

#[axum::debug_handler]
pub async fn list_admins(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let service = AdminService::new(&state.database);

    let admins = service.list_admins().await?;

    Ok(Json(json!({
        "admins": admins,
        "total": admins.len()
    })))
}

#[axum::debug_handler]
pub async fn update_admin(
    State(state): State<Arc<AppState>>,
    Path(admin_id): Path<String>,
    Json(admin): Json<Admin>,
) -> Result<Json<Value>, AppError> {
    let service = AdminService::new(&state.database);
    let admin_id = EntityId::from(admin_id);

    let admin = service
        .update_admin(&admin_id, admin)
        .await?
        .ok_or_else(|| not_found(&admin_id))?;

    Ok(Json(json!(admin)))
}

#[axum::debug_handler]
pub async fn patch_admin(
    State(state): State<Arc<AppState>>,
    Path(admin_id): Path<String>,
    Json(changes): Json<UpdateAdminRequest>,
) -> Result<Json<Value>, AppError> {
    let service = AdminService::new(&state.database);
    let admin_id = EntityId::from(admin_id);

    let admin = service
        .patch_admin(&admin_id, changes)
        .await?
        .ok_or_else(|| not_found(&admin_id))?;

    Ok(Json(json!(admin)))
}

#[axum::debug_handler]
pub async fn delete_admin(
    State(state): State<Arc<AppState>>,
    Path(admin_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = AdminService::new(&state.database);
    let admin_id = EntityId::from(admin_id);

    if !service.delete_admin(&admin_id).await? {
        return Err(not_found(&admin_id));
    }

    Ok(Json(json!({
        "deleted": true,
        "id": admin_id
    })))
}
