use axum::{
    Router,
    routing::{delete, get, post, put},
};

mod health;
mod inventory;
mod meal_plans;
mod recipes;
mod shopping;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub command: larder_shopping::Command,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/api/inventory", get(inventory::list).post(inventory::create))
        .route("/api/inventory/expiring", get(inventory::expiring))
        .route("/api/inventory/refresh", post(inventory::refresh))
        .route(
            "/api/inventory/{id}",
            put(inventory::update).delete(inventory::remove),
        )
        .route("/api/inventory/{id}/deduct", post(inventory::deduct))
        .route("/api/recipes", get(recipes::list).post(recipes::create))
        .route("/api/recipes/{id}", get(recipes::detail))
        .route(
            "/api/meal-plans",
            get(meal_plans::list).post(meal_plans::create),
        )
        .route("/api/meal-plans/week", get(meal_plans::week))
        .route("/api/meal-plans/{id}", delete(meal_plans::remove))
        .route("/api/shopping", get(shopping::list).post(shopping::create))
        .route("/api/shopping/{id}", delete(shopping::remove))
        .route("/api/shopping/{id}/toggle", post(shopping::toggle))
        .route("/api/shopping/reset", post(shopping::reset))
        .route("/api/shopping/clear-completed", post(shopping::clear_completed))
        .route("/api/shopping/categorize", post(shopping::categorize))
        .route("/api/shopping/generate", post(shopping::generate))
        .route("/api/shopping/auto-replenish", post(shopping::auto_replenish))
        .route("/api/shopping/from-recipe/{id}", post(shopping::from_recipe))
        .route("/api/shopping/from-meal-plans", post(shopping::from_meal_plans))
        .route("/api/shopping/from-text", post(shopping::from_text))
        .route("/api/shopping/optimize", post(shopping::optimize))
        .with_state(app_state)
}
