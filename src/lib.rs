pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod routes;

pub use routes::AppState;

use larder_shopping::{
    Command, HttpExtractor, HttpRanking, IngredientExtractor, NoExtractor, NoRanking,
    RankingProvider, State, Store,
};
use std::sync::Arc;

/// Build the engine state from configuration. Services without a url are
/// replaced by their local fallbacks.
pub fn create_state(config: &crate::config::Config) -> anyhow::Result<State> {
    let ranking: Arc<dyn RankingProvider> = if config.ranking.enabled() {
        Arc::new(HttpRanking::new(
            config.ranking.url.to_owned(),
            config.ranking.timeout(),
        )?)
    } else {
        Arc::new(NoRanking)
    };

    let extractor: Arc<dyn IngredientExtractor> = if config.extraction.enabled() {
        Arc::new(HttpExtractor::new(
            config.extraction.url.to_owned(),
            config.extraction.timeout(),
        )?)
    } else {
        Arc::new(NoExtractor)
    };

    Ok(State::new(Store::default(), ranking, extractor))
}

/// Create app router for testing
///
/// Same routes as `serve`, without binding a listener.
pub fn create_app(config: crate::config::Config) -> anyhow::Result<axum::Router> {
    let command = Command::new(create_state(&config)?);

    Ok(routes::router(AppState { config, command }))
}
