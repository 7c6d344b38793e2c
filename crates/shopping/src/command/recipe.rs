use larder_shared::recipe::Recipe;
use serde::Deserialize;
use validator::Validate;

#[derive(Validate, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub missing_ingredients: Vec<String>,
}

impl super::Command {
    pub async fn recipes(&self) -> Vec<Recipe> {
        self.store.read().await.recipes.clone()
    }

    pub async fn recipe(&self, id: &str) -> larder_shared::Result<Recipe> {
        let Some(recipe) = self.store.read().await.recipe(id).cloned() else {
            larder_shared::not_found!("recipe {id}");
        };

        Ok(recipe)
    }

    pub async fn add_recipe(&self, input: RecipeInput) -> larder_shared::Result<Recipe> {
        input.validate()?;

        let name = input.name.trim();
        if name.is_empty() {
            larder_shared::user!("recipe name must not be blank");
        }

        let recipe = Recipe {
            id: larder_shared::new_id(),
            name: name.to_owned(),
            ingredients: input.ingredients,
            missing_ingredients: input.missing_ingredients,
        };

        self.store.write().await.recipes.push(recipe.clone());

        Ok(recipe)
    }
}
