use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::{AppError, EntityId};

use crate::models::{Rating, UpdateRatingRequest};
use crate::services::RatingService;

fn rating_not_found(rating_id: &EntityId) -> AppError {
    AppError::NotFound(format!("Rating {} not found", rating_id))
}

#[axum::debug_handler]
pub async fn create_rating(
    State(state): State<Arc<AppState>>,
    Json(rating): Json<Rating>,
) -> Result<Json<Value>, AppError> {
    let rating = RatingService::new(&state.database).create_rating(rating).await?;

    Ok(Json(json!(rating)))
}

#[axum::debug_handler]
pub async fn get_rating(
    State(state): State<Arc<AppState>>,
    Path(rating_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let rating_id = EntityId::from(rating_id);

    let rating = RatingService::new(&state.database)
        .get_rating(&rating_id)
        .await?
        .ok_or_else(|| rating_not_found(&rating_id))?;

    Ok(Json(json!(rating)))
}

#[axum::debug_handler]
pub async fn list_ratings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let ratings = RatingService::new(&state.database).list_ratings().await?;

    Ok(Json(json!({
        "ratings": ratings,
        "total": ratings.len()
    })))
}

#[axum::debug_handler]
pub async fn update_rating(
    State(state): State<Arc<AppState>>,
    Path(rating_id): Path<String>,
    Json(rating): Json<Rating>,
) -> Result<Json<Value>, AppError> {
    let rating_id = EntityId::from(rating_id);

    let rating = RatingService::new(&state.database)
        .update_rating(&rating_id, rating)
        .await?
        .ok_or_else(|| rating_not_found(&rating_id))?;

    Ok(Json(json!(rating)))
}

#[axum::debug_handler]
pub async fn patch_rating(
    State(state): State<Arc<AppState>>,
    Path(rating_id): Path<String>,
    Json(changes): Json<UpdateRatingRequest>,
) -> Result<Json<Value>, AppError> {
    let rating_id = EntityId::from(rating_id);

    let rating = RatingService::new(&state.database)
        .patch_rating(&rating_id, changes)
        .await?
        .ok_or_else(|| rating_not_found(&rating_id))?;

    Ok(Json(json!(rating)))
}

#[axum::debug_handler]
pub async fn delete_rating(
    State(state): State<Arc<AppState>>,
    Path(rating_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let rating_id = EntityId::from(rating_id);

    if !RatingService::new(&state.database).delete_rating(&rating_id).await? {
        return Err(rating_not_found(&rating_id));
    }

    Ok(Json(json!({
        "deleted": true,
        "id": rating_id
    })))
}
