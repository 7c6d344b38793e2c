mod generate;
mod inventory;
mod optimize;
mod planning;
mod recipe;
mod shopping;

pub use generate::*;
pub use inventory::*;
pub use planning::*;
pub use recipe::*;
pub use shopping::*;

use std::{ops::Deref, sync::Arc};

use crate::extraction::{IngredientExtractor, NoExtractor};
use crate::priority::{NoRanking, RankingProvider};
use crate::store::Store;

/// Everything a command needs: the store and the external capabilities.
#[derive(Clone)]
pub struct State {
    pub store: Store,
    pub ranking: Arc<dyn RankingProvider>,
    pub extractor: Arc<dyn IngredientExtractor>,
}

impl State {
    pub fn new(
        store: Store,
        ranking: Arc<dyn RankingProvider>,
        extractor: Arc<dyn IngredientExtractor>,
    ) -> Self {
        Self {
            store,
            ranking,
            extractor,
        }
    }

    /// Empty store, no external services.
    pub fn in_memory() -> Self {
        Self::new(Store::default(), Arc::new(NoRanking), Arc::new(NoExtractor))
    }
}

#[derive(Clone)]
pub struct Command {
    state: State,
}

impl Deref for Command {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: State) -> Self {
        Self { state }
    }
}
