use larder_shared::shopping::ShoppingItem;
use serde::{Deserialize, Serialize};
use time::Date;
use validator::Validate;

use crate::categorization::CategorizationService;
use crate::demand::{Demand, DemandProfile};
use crate::extraction::extract_ingredients;
use crate::meal_plan::{self, MealPlanScope};
use crate::quantity;
use crate::replenishment::replenishment_demands;

/// Entries a generation trigger appended, in creation order.
#[derive(Serialize, Debug, Clone, Default)]
pub struct Generated {
    pub created: Vec<ShoppingItem>,
    pub count: usize,
}

impl From<Vec<ShoppingItem>> for Generated {
    fn from(created: Vec<ShoppingItem>) -> Self {
        Self {
            count: created.len(),
            created,
        }
    }
}

#[derive(Validate, Deserialize, Debug, Clone)]
pub struct FromTextInput {
    #[validate(length(min = 1, max = 4000))]
    pub text: String,
}

impl super::Command {
    /// Replenishment followed by the meal-plan line scan, as one pass.
    pub async fn generate(&self, scope: MealPlanScope, today: Date) -> Generated {
        let mut collections = self.store.write().await;

        let mut demands = replenishment_demands(&collections);
        demands.extend(meal_plan::line_demands(&collections, scope, today));

        let generated = Generated::from(collections.append_missing(demands));
        tracing::info!(count = generated.count, ?scope, "shopping list generated");

        generated
    }

    /// Add every inventory item about to expire. Running it twice adds
    /// nothing the second time.
    pub async fn auto_replenish(&self) -> Generated {
        let mut collections = self.store.write().await;

        let demands = replenishment_demands(&collections);
        let generated = Generated::from(collections.append_missing(demands));
        tracing::info!(count = generated.count, "inventory replenished");

        generated
    }

    /// Add a recipe's pre-resolved missing ingredients.
    pub async fn from_recipe(&self, id: &str) -> larder_shared::Result<Generated> {
        let mut collections = self.store.write().await;

        let Some(recipe) = collections.recipe(id) else {
            larder_shared::not_found!("recipe {id}");
        };

        let demands = meal_plan::resolved_demands(recipe, DemandProfile::RESOLVED_RECIPE);
        let generated = Generated::from(collections.append_missing(demands));
        tracing::info!(count = generated.count, recipe_id = %id, "shopping list generated from recipe");

        Ok(generated)
    }

    /// Add the missing ingredients of every recipe planned this week.
    pub async fn from_meal_plans(&self, today: Date) -> Generated {
        let mut collections = self.store.write().await;

        let demands = meal_plan::resolved_week_demands(&collections, today);
        let generated = Generated::from(collections.append_missing(demands));
        tracing::info!(count = generated.count, "shopping list generated from weekly meal plans");

        generated
    }

    /// Bulk entry from free text. The extractor is awaited before the store
    /// is locked.
    pub async fn from_text(&self, input: FromTextInput) -> larder_shared::Result<Generated> {
        if let Err(e) = input.validate() {
            tracing::debug!(error = %e, "free text rejected");
            return Err(e.into());
        }

        let demands = extract_ingredients(self.extractor.as_ref(), &input.text)
            .await
            .into_iter()
            .filter(|ingredient| !ingredient.name.trim().is_empty())
            .map(|ingredient| {
                let name = ingredient.name.trim().to_owned();
                let category = CategorizationService::categorize(&name);

                // Rows without a usable quantity keep the profile default.
                let amount = match quantity::parse_positive(&ingredient.quantity) {
                    Ok(_) => ingredient.quantity.trim().to_owned(),
                    Err(e) => {
                        tracing::debug!(%name, error = %e, "extracted quantity ignored");
                        DemandProfile::MANUAL_TEXT.quantity.to_owned()
                    }
                };

                Demand::new(name, DemandProfile::MANUAL_TEXT)
                    .category(Some(category.as_str()))
                    .quantity(amount)
                    .unit(ingredient.unit.as_deref())
            })
            .collect::<Vec<_>>();

        let generated = Generated::from(self.store.write().await.append_missing(demands));
        tracing::info!(count = generated.count, "shopping list generated from text");

        Ok(generated)
    }
}
