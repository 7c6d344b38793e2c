use larder_shared::inventory::InventoryItem;
use larder_shared::mealplan::MealPlan;
use larder_shared::recipe::Recipe;
use larder_shared::shopping::ShoppingItem;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::categorization::{CategorizationService, CategoryGroup};
use crate::demand::Demand;
use crate::matcher::matches;

/// In-process collections shared by every entry point.
#[derive(Debug, Default, Clone)]
pub struct Collections {
    pub inventory: Vec<InventoryItem>,
    pub recipes: Vec<Recipe>,
    pub meal_plans: Vec<MealPlan>,
    pub shopping: Vec<ShoppingItem>,
}

impl Collections {
    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn inventory_covers(&self, name: &str) -> bool {
        self.inventory.iter().any(|item| matches(name, &item.name))
    }

    pub fn has_active_entry(&self, name: &str) -> bool {
        self.shopping
            .iter()
            .filter(|item| item.is_active())
            .any(|item| matches(name, &item.name))
    }

    /// Append every demand that no active entry (and, when asked, no
    /// inventory item) already covers. Demands are checked in order, so two
    /// equivalent demands in one pass yield a single entry. Blank names can
    /// never be deduplicated and are dropped.
    pub fn append_missing(&mut self, demands: Vec<Demand>) -> Vec<ShoppingItem> {
        let mut created = Vec::new();

        for demand in demands {
            if crate::matcher::normalize(&demand.name).is_empty() {
                tracing::debug!("demand with a blank name skipped");
                continue;
            }

            if demand.check_inventory && self.inventory_covers(&demand.name) {
                continue;
            }

            if self.has_active_entry(&demand.name) {
                continue;
            }

            let item = ShoppingItem {
                id: larder_shared::new_id(),
                name: demand.name,
                category: demand.category,
                quantity: demand.quantity,
                unit: demand.unit,
                completed: false,
                created_at: OffsetDateTime::now_utc(),
                source: demand.source,
                recipe_id: demand.recipe_id,
                priority: demand.priority,
            };

            self.shopping.push(item.clone());
            created.push(item);
        }

        created
    }

    /// Overwrite every entry's category from its name and group the list.
    pub fn categorize_all(&mut self) -> Vec<CategoryGroup> {
        for item in self.shopping.iter_mut() {
            item.category = CategorizationService::categorize(&item.name).to_string();
        }

        CategorizationService::group(&self.shopping)
    }
}

/// Single-writer handle over [`Collections`].
///
/// Every read-then-write sequence (dedup check followed by append) must run
/// under one write guard.
#[derive(Debug, Clone, Default)]
pub struct Store(Arc<RwLock<Collections>>);

impl Store {
    pub fn new(collections: Collections) -> Self {
        Self(Arc::new(RwLock::new(collections)))
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.0.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.0.write().await
    }
}
