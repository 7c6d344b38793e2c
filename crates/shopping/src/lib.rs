pub mod categorization;
pub mod command;
pub mod demand;
pub mod extraction;
pub mod matcher;
pub mod meal_plan;
pub mod priority;
pub mod quantity;
pub mod replenishment;
pub mod store;

// Re-export commonly used types
pub use categorization::{CategorizationService, Category, CategoryGroup};
pub use command::{Command, Generated, State};
pub use demand::{Demand, DemandProfile};
pub use extraction::{HttpExtractor, IngredientExtractor, NoExtractor, ParsedIngredient};
pub use matcher::matches;
pub use meal_plan::MealPlanScope;
pub use priority::{
    HttpRanking, NoRanking, OptimizeReport, PriorityOptimizer, RankedPriority, RankingEntry,
    RankingProvider, Tier,
};
pub use store::{Collections, Store};
