use larder_shared::shopping::{Priority, ShoppingItem, Source};
use serde::Deserialize;
use time::OffsetDateTime;
use validator::Validate;

use crate::categorization::{CategorizationService, CategoryGroup};
use crate::quantity;

#[derive(Validate, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddItemInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub category: Option<String>,
    #[validate(length(min = 1, max = 40))]
    pub quantity: Option<String>,
    pub unit: Option<String>,
    pub priority: Option<Priority>,
}

impl super::Command {
    pub async fn shopping_list(&self) -> Vec<ShoppingItem> {
        self.store.read().await.shopping.clone()
    }

    /// Add an entry by hand. Manual additions are never deduplicated.
    pub async fn add_item(&self, input: AddItemInput) -> larder_shared::Result<ShoppingItem> {
        input.validate()?;

        let name = input.name.trim().to_owned();
        if name.is_empty() {
            larder_shared::user!("item name must not be blank");
        }

        let quantity = match input.quantity {
            Some(value) => {
                quantity::parse_positive(&value).map_err(larder_shared::Error::User)?;
                value.trim().to_owned()
            }
            None => "1".to_owned(),
        };

        let category = input
            .category
            .filter(|category| !category.trim().is_empty())
            .unwrap_or_else(|| CategorizationService::categorize(&name).to_string());

        let item = ShoppingItem {
            id: larder_shared::new_id(),
            name,
            category,
            quantity,
            unit: input
                .unit
                .filter(|unit| !unit.trim().is_empty())
                .unwrap_or_else(|| "unit".to_owned()),
            completed: false,
            created_at: OffsetDateTime::now_utc(),
            source: Source::Manual,
            recipe_id: None,
            priority: input.priority.unwrap_or_default(),
        };

        self.store.write().await.shopping.push(item.clone());

        Ok(item)
    }

    /// Flip the completion flag. Completing an entry frees its name for the
    /// next generation run.
    pub async fn toggle_item(&self, id: &str) -> larder_shared::Result<ShoppingItem> {
        let mut collections = self.store.write().await;
        let Some(item) = collections.shopping.iter_mut().find(|item| item.id == id) else {
            larder_shared::not_found!("shopping item {id}");
        };

        item.completed = !item.completed;

        Ok(item.clone())
    }

    pub async fn delete_item(&self, id: &str) -> larder_shared::Result<()> {
        let mut collections = self.store.write().await;
        let before = collections.shopping.len();
        collections.shopping.retain(|item| item.id != id);

        if collections.shopping.len() == before {
            larder_shared::not_found!("shopping item {id}");
        }

        Ok(())
    }

    /// Uncheck every entry for the next trip.
    pub async fn reset_list(&self) -> Vec<ShoppingItem> {
        let mut collections = self.store.write().await;

        for item in collections.shopping.iter_mut() {
            item.completed = false;
        }

        collections.shopping.clone()
    }

    /// Remove completed entries; returns how many were dropped.
    pub async fn clear_completed(&self) -> usize {
        let mut collections = self.store.write().await;
        let before = collections.shopping.len();
        collections.shopping.retain(ShoppingItem::is_active);

        before - collections.shopping.len()
    }

    /// Re-categorize every entry in place and return the grouped list.
    pub async fn categorize_list(&self) -> Vec<CategoryGroup> {
        self.store.write().await.categorize_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Command, State};

    fn input(name: &str) -> AddItemInput {
        AddItemInput {
            name: name.to_owned(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_add_item_defaults() {
        let command = Command::new(State::in_memory());
        let item = command.add_item(input("Cheddar cheese")).await.unwrap();

        assert_eq!(item.category, "Dairy");
        assert_eq!(item.quantity, "1");
        assert_eq!(item.unit, "unit");
        assert_eq!(item.source, Source::Manual);
        assert_eq!(item.priority, Priority::Medium);
        assert!(!item.completed);
    }

    #[tokio::test]
    async fn test_manual_entries_are_not_deduplicated() {
        let command = Command::new(State::in_memory());
        command.add_item(input("Milk")).await.unwrap();
        command.add_item(input("milk")).await.unwrap();

        assert_eq!(command.shopping_list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_add_item_validation() {
        let command = Command::new(State::in_memory());

        assert!(matches!(
            command.add_item(input("")).await,
            Err(larder_shared::Error::Validate(_))
        ));
        assert!(matches!(
            command.add_item(input("   ")).await,
            Err(larder_shared::Error::User(_))
        ));
        assert!(matches!(
            command
                .add_item(AddItemInput {
                    quantity: Some(String::new()),
                    ..input("Milk")
                })
                .await,
            Err(larder_shared::Error::Validate(_))
        ));
        assert!(command.shopping_list().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_item_rejects_bad_quantities() {
        let command = Command::new(State::in_memory());

        for quantity in ["-3", "0", "lots", "1/0"] {
            let result = command
                .add_item(AddItemInput {
                    quantity: Some(quantity.to_owned()),
                    ..input("Milk")
                })
                .await;

            assert!(
                matches!(result, Err(larder_shared::Error::User(_))),
                "{quantity} should be rejected"
            );
        }

        let item = command
            .add_item(AddItemInput {
                quantity: Some(" 1 1/2 ".to_owned()),
                ..input("Milk")
            })
            .await
            .unwrap();
        assert_eq!(item.quantity, "1 1/2");
        assert_eq!(command.shopping_list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_reset_and_clear() {
        let command = Command::new(State::in_memory());
        let milk = command.add_item(input("Milk")).await.unwrap();
        let eggs = command.add_item(input("Eggs")).await.unwrap();

        assert!(command.toggle_item(&milk.id).await.unwrap().completed);
        assert!(!command.toggle_item(&milk.id).await.unwrap().completed);

        command.toggle_item(&milk.id).await.unwrap();
        command.toggle_item(&eggs.id).await.unwrap();
        assert!(command.reset_list().await.iter().all(|item| !item.completed));

        command.toggle_item(&eggs.id).await.unwrap();
        assert_eq!(command.clear_completed().await, 1);
        assert_eq!(command.shopping_list().await.len(), 1);

        assert!(matches!(
            command.delete_item(&eggs.id).await,
            Err(larder_shared::Error::NotFound(_))
        ));
        command.delete_item(&milk.id).await.unwrap();
        assert!(command.shopping_list().await.is_empty());
    }
}
