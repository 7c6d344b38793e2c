use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use larder_shared::shopping::ShoppingItem;
use larder_shopping::command::{AddItemInput, FromTextInput};
use larder_shopping::{CategoryGroup, Generated, MealPlanScope, OptimizeReport};
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::routes::AppState;

#[derive(Deserialize)]
pub struct GenerateQuery {
    #[serde(default)]
    pub scope: MealPlanScope,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<ShoppingItem>> {
    Json(state.command.shopping_list().await)
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<AddItemInput>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.command.add_item(input).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ShoppingItem>, AppError> {
    Ok(Json(state.command.toggle_item(&id).await?))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.command.delete_item(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn reset(State(state): State<AppState>) -> Json<Vec<ShoppingItem>> {
    Json(state.command.reset_list().await)
}

pub async fn clear_completed(State(state): State<AppState>) -> impl IntoResponse {
    let removed = state.command.clear_completed().await;

    Json(json!({ "removed": removed }))
}

pub async fn categorize(State(state): State<AppState>) -> Json<Vec<CategoryGroup>> {
    Json(state.command.categorize_list().await)
}

/// POST /api/shopping/generate?scope=all|week
pub async fn generate(
    State(state): State<AppState>,
    Query(query): Query<GenerateQuery>,
) -> Json<Generated> {
    Json(
        state
            .command
            .generate(query.scope, larder_shared::today())
            .await,
    )
}

pub async fn auto_replenish(State(state): State<AppState>) -> Json<Generated> {
    Json(state.command.auto_replenish().await)
}

pub async fn from_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Generated>, AppError> {
    Ok(Json(state.command.from_recipe(&id).await?))
}

pub async fn from_meal_plans(State(state): State<AppState>) -> Json<Generated> {
    Json(state.command.from_meal_plans(larder_shared::today()).await)
}

pub async fn from_text(
    State(state): State<AppState>,
    Json(input): Json<FromTextInput>,
) -> Result<Json<Generated>, AppError> {
    Ok(Json(state.command.from_text(input).await?))
}

pub async fn optimize(State(state): State<AppState>) -> Json<OptimizeReport> {
    Json(state.command.optimize().await)
}
