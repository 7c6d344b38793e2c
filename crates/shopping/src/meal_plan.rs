use larder_shared::mealplan::MealPlan;
use larder_shared::recipe::Recipe;
use serde::Deserialize;
use time::Date;

use crate::demand::{Demand, DemandProfile};
use crate::extraction::{candidate_name, capitalize_first};
use crate::store::Collections;

/// Which meal plans a scan looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MealPlanScope {
    #[default]
    All,
    /// Plans dated `[today, today + 6 days]`, both ends included.
    Week,
}

impl MealPlanScope {
    pub fn includes(&self, plan: &MealPlan, today: Date) -> bool {
        match self {
            MealPlanScope::All => true,
            MealPlanScope::Week => larder_shared::is_within_week(plan.date, today),
        }
    }
}

/// Resolve the recipe of every plan in scope, skipping dangling references.
fn planned_recipes<'a>(
    collections: &'a Collections,
    scope: MealPlanScope,
    today: Date,
) -> impl Iterator<Item = &'a Recipe> + 'a {
    collections
        .meal_plans
        .iter()
        .filter(move |plan| scope.includes(plan, today))
        .filter_map(move |plan| {
            let recipe = collections.recipe(&plan.recipe_id);
            if recipe.is_none() {
                tracing::warn!(
                    meal_plan_id = %plan.id,
                    recipe_id = %plan.recipe_id,
                    "meal plan references an unknown recipe, skipped"
                );
            }
            recipe
        })
}

/// Scan the free-text ingredient lines of planned recipes.
///
/// Each line is reduced to a candidate name; inventory coverage and the
/// active list are checked when the demands are appended.
pub fn line_demands(
    collections: &Collections,
    scope: MealPlanScope,
    today: Date,
) -> Vec<Demand> {
    planned_recipes(collections, scope, today)
        .flat_map(|recipe| {
            recipe.ingredients.iter().filter_map(move |line| {
                let name = candidate_name(line)?;
                Some(
                    Demand::new(capitalize_first(&name), DemandProfile::LINE_SCAN)
                        .recipe(recipe.id.to_owned()),
                )
            })
        })
        .collect()
}

/// A recipe's pre-resolved missing ingredients, used as-is.
pub fn resolved_demands(recipe: &Recipe, profile: DemandProfile) -> Vec<Demand> {
    recipe
        .missing_ingredients
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| Demand::new(name, profile).recipe(recipe.id.to_owned()))
        .collect()
}

/// Missing ingredients of every recipe planned this week.
pub fn resolved_week_demands(collections: &Collections, today: Date) -> Vec<Demand> {
    planned_recipes(collections, MealPlanScope::Week, today)
        .flat_map(|recipe| resolved_demands(recipe, DemandProfile::RESOLVED_MEAL_PLAN))
        .collect()
}
