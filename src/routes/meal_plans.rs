use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use larder_shared::mealplan::MealPlan;
use larder_shopping::command::MealPlanInput;

use crate::error::AppError;
use crate::routes::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<MealPlan>> {
    Json(state.command.meal_plans().await)
}

/// GET /api/meal-plans/week - plans dated today through today + 6
pub async fn week(State(state): State<AppState>) -> Json<Vec<MealPlan>> {
    Json(state.command.week_meal_plans(larder_shared::today()).await)
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<MealPlanInput>,
) -> Result<impl IntoResponse, AppError> {
    let plan = state.command.add_meal_plan(input).await?;

    Ok((StatusCode::CREATED, Json(plan)))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.command.delete_meal_plan(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
