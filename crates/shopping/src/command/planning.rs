use larder_shared::mealplan::{MealPlan, MealSlot};
use serde::Deserialize;
use time::Date;
use validator::Validate;

#[derive(Validate, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanInput {
    pub date: Date,
    #[serde(default)]
    pub meal: MealSlot,
    #[validate(length(min = 1))]
    pub recipe_id: String,
    #[validate(range(min = 1, max = 50))]
    pub servings: u16,
}

impl super::Command {
    pub async fn meal_plans(&self) -> Vec<MealPlan> {
        self.store.read().await.meal_plans.clone()
    }

    /// Plans dated within `[today, today + 6 days]`, ordered by date.
    pub async fn week_meal_plans(&self, today: Date) -> Vec<MealPlan> {
        let mut plans = self
            .store
            .read()
            .await
            .meal_plans
            .iter()
            .filter(|plan| larder_shared::is_within_week(plan.date, today))
            .cloned()
            .collect::<Vec<_>>();

        plans.sort_by_key(|plan| plan.date);
        plans
    }

    pub async fn add_meal_plan(&self, input: MealPlanInput) -> larder_shared::Result<MealPlan> {
        input.validate()?;

        let mut collections = self.store.write().await;
        if collections.recipe(&input.recipe_id).is_none() {
            larder_shared::not_found!("recipe {}", input.recipe_id);
        }

        let plan = MealPlan {
            id: larder_shared::new_id(),
            date: input.date,
            meal: input.meal,
            recipe_id: input.recipe_id,
            servings: input.servings,
        };

        collections.meal_plans.push(plan.clone());

        Ok(plan)
    }

    pub async fn delete_meal_plan(&self, id: &str) -> larder_shared::Result<()> {
        let mut collections = self.store.write().await;
        let before = collections.meal_plans.len();
        collections.meal_plans.retain(|plan| plan.id != id);

        if collections.meal_plans.len() == before {
            larder_shared::not_found!("meal plan {id}");
        }

        Ok(())
    }
}
