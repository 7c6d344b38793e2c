use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use larder_shared::inventory::InventoryItem;
use larder_shopping::command::{DeductInput, InventoryInput};
use larder_shopping::replenishment::EXPIRY_THRESHOLD_DAYS;
use serde::Deserialize;

use crate::error::AppError;
use crate::routes::AppState;

#[derive(Deserialize)]
pub struct ExpiringQuery {
    pub days: Option<i64>,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<InventoryItem>> {
    Json(state.command.inventory().await)
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<InventoryInput>,
) -> Result<impl IntoResponse, AppError> {
    let item = state
        .command
        .add_inventory(input, larder_shared::today())
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<InventoryInput>,
) -> Result<Json<InventoryItem>, AppError> {
    let item = state
        .command
        .update_inventory(&id, input, larder_shared::today())
        .await?;

    Ok(Json(item))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.command.delete_inventory(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn deduct(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<DeductInput>,
) -> Result<Json<InventoryItem>, AppError> {
    Ok(Json(state.command.deduct_inventory(&id, input).await?))
}

/// POST /api/inventory/refresh - recompute `daysLeft` against today
pub async fn refresh(State(state): State<AppState>) -> Json<Vec<InventoryItem>> {
    Json(state.command.refresh_inventory(larder_shared::today()).await)
}

/// GET /api/inventory/expiring?days=N
pub async fn expiring(
    State(state): State<AppState>,
    Query(query): Query<ExpiringQuery>,
) -> Json<Vec<InventoryItem>> {
    let days = query.days.unwrap_or(EXPIRY_THRESHOLD_DAYS);

    Json(state.command.expiring(days).await)
}
