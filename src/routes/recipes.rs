use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use larder_shared::recipe::Recipe;
use larder_shopping::command::RecipeInput;

use crate::error::AppError;
use crate::routes::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    Json(state.command.recipes().await)
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, AppError> {
    Ok(Json(state.command.recipe(&id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<RecipeInput>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = state.command.add_recipe(input).await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}
