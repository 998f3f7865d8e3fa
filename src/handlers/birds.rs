use crate::datalayer::birds::{Bird, BirdStore};
use crate::errors::errors::ServiceError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

// ===== REQUEST DTOs =====

#[derive(Debug, Deserialize)]
pub struct CreateBirdRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBirdRequest {
    pub name: String,
}

// ===== RESPONSE DTOs =====

#[derive(Debug, Serialize, Deserialize)]
pub struct BirdResponse {
    pub id: i64,
    pub name: String,
}

impl From<Bird> for BirdResponse {
    fn from(bird: Bird) -> Self {
        Self {
            id: bird.id,
            name: bird.name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ===== HANDLERS =====

/// POST /birds/
/// Create a new bird
#[instrument(skip(state), fields(service = "/birds"))]
pub async fn create_bird(
    State(state): State<AppState>,
    Json(payload): Json<CreateBirdRequest>,
) -> Result<Json<BirdResponse>, ServiceError> {
    info!(name = %payload.name, "Creating new bird");

    let bird = BirdStore::create(&state.pool, &payload.name).await?;

    info!(bird_id = %bird.id, "Bird created successfully");
    Ok(Json(bird.into()))
}

/// GET /birds/
/// List all birds in storage order
#[instrument(skip(state), fields(service = "/birds"))]
pub async fn list_birds(
    State(state): State<AppState>,
) -> Result<Json<Vec<BirdResponse>>, ServiceError> {
    let birds = BirdStore::list(&state.pool).await?;

    info!(count = %birds.len(), "Listed birds");
    Ok(Json(birds.into_iter().map(BirdResponse::from).collect()))
}

/// GET /birds/:id
/// Get a single bird by id
#[instrument(skip(state), fields(service = "/birds/:id"))]
pub async fn get_bird(
    State(state): State<AppState>,
    Path(bird_id): Path<i64>,
) -> Result<Json<BirdResponse>, ServiceError> {
    info!(bird_id = %bird_id, "Getting bird");

    let bird = BirdStore::get_by_id(&state.pool, bird_id).await?;

    Ok(Json(bird.into()))
}

/// PUT /birds/:id
/// Rename a bird
#[instrument(skip(state), fields(service = "/birds/:id"))]
pub async fn update_bird(
    State(state): State<AppState>,
    Path(bird_id): Path<i64>,
    Json(payload): Json<UpdateBirdRequest>,
) -> Result<Json<BirdResponse>, ServiceError> {
    info!(bird_id = %bird_id, name = %payload.name, "Updating bird");

    let bird = BirdStore::update_name(&state.pool, bird_id, &payload.name).await?;

    info!(bird_id = %bird.id, "Bird updated successfully");
    Ok(Json(bird.into()))
}

/// DELETE /birds/:id
/// Delete a bird
#[instrument(skip(state), fields(service = "/birds/:id"))]
pub async fn delete_bird(
    State(state): State<AppState>,
    Path(bird_id): Path<i64>,
) -> Result<Json<MessageResponse>, ServiceError> {
    info!(bird_id = %bird_id, "Deleting bird");

    BirdStore::delete(&state.pool, bird_id).await?;

    info!(bird_id = %bird_id, "Bird deleted successfully");
    Ok(Json(MessageResponse {
        message: "Bird deleted successfully".to_string(),
    }))
}

/// PUT /birds/:id1/:id2
/// Exchange the names of two birds
#[instrument(skip(state), fields(service = "/birds/:id1/:id2"))]
pub async fn swap_bird_names(
    State(state): State<AppState>,
    Path((first_id, second_id)): Path<(i64, i64)>,
) -> Result<Json<MessageResponse>, ServiceError> {
    info!(first_id = %first_id, second_id = %second_id, "Swapping bird names");

    BirdStore::swap_names(&state.pool, first_id, second_id).await?;

    Ok(Json(MessageResponse {
        message: "Bird names swapped successfully".to_string(),
    }))
}
