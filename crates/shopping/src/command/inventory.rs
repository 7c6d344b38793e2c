use larder_shared::inventory::InventoryItem;
use serde::Deserialize;
use time::Date;
use validator::Validate;

use crate::quantity;

#[derive(Validate, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InventoryInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, max = 100_000.0))]
    pub quantity: f64,
    pub unit: Option<String>,
    pub category: Option<String>,
    pub expiry_date: Date,
}

impl InventoryInput {
    fn into_item(self, id: String, today: Date) -> larder_shared::Result<InventoryItem> {
        let name = self.name.trim();
        if name.is_empty() {
            larder_shared::user!("inventory item name must not be blank");
        }

        let mut item = InventoryItem {
            id,
            name: name.to_owned(),
            quantity: quantity::from_amount(self.quantity).map_err(larder_shared::Error::User)?,
            unit: self.unit.filter(|unit| !unit.trim().is_empty()),
            category: self.category.filter(|category| !category.trim().is_empty()),
            expiry_date: self.expiry_date,
            days_left: 0,
        };
        item.refresh_days_left(today);
        Ok(item)
    }
}

#[derive(Validate, Deserialize, Debug, Clone)]
pub struct DeductInput {
    #[validate(range(exclusive_min = 0.0, max = 100_000.0))]
    pub amount: f64,
}

impl super::Command {
    pub async fn inventory(&self) -> Vec<InventoryItem> {
        self.store.read().await.inventory.clone()
    }

    /// Items whose stored `days_left` is at most `days`.
    pub async fn expiring(&self, days: i64) -> Vec<InventoryItem> {
        self.store
            .read()
            .await
            .inventory
            .iter()
            .filter(|item| item.is_expiring_within(days))
            .cloned()
            .collect()
    }

    pub async fn add_inventory(
        &self,
        input: InventoryInput,
        today: Date,
    ) -> larder_shared::Result<InventoryItem> {
        input.validate()?;

        let item = input.into_item(larder_shared::new_id(), today)?;
        self.store.write().await.inventory.push(item.clone());

        tracing::info!(id = %item.id, name = %item.name, days_left = item.days_left, "inventory item added");

        Ok(item)
    }

    /// Replace an item; `days_left` is recomputed on every write.
    pub async fn update_inventory(
        &self,
        id: &str,
        input: InventoryInput,
        today: Date,
    ) -> larder_shared::Result<InventoryItem> {
        input.validate()?;

        let mut collections = self.store.write().await;
        let Some(existing) = collections.inventory.iter_mut().find(|item| item.id == id) else {
            larder_shared::not_found!("inventory item {id}");
        };

        *existing = input.into_item(id.to_owned(), today)?;

        Ok(existing.clone())
    }

    pub async fn delete_inventory(&self, id: &str) -> larder_shared::Result<()> {
        let mut collections = self.store.write().await;
        let before = collections.inventory.len();
        collections.inventory.retain(|item| item.id != id);

        if collections.inventory.len() == before {
            larder_shared::not_found!("inventory item {id}");
        }

        Ok(())
    }

    /// Subtract from an item's quantity, clamping at zero. The item stays.
    pub async fn deduct_inventory(
        &self,
        id: &str,
        input: DeductInput,
    ) -> larder_shared::Result<InventoryItem> {
        input.validate()?;

        let mut collections = self.store.write().await;
        let Some(item) = collections.inventory.iter_mut().find(|item| item.id == id) else {
            larder_shared::not_found!("inventory item {id}");
        };

        item.quantity =
            quantity::deduct(&item.quantity, input.amount).map_err(larder_shared::Error::User)?;

        Ok(item.clone())
    }

    /// Recompute every stored `days_left` snapshot against `today`.
    pub async fn refresh_inventory(&self, today: Date) -> Vec<InventoryItem> {
        let mut collections = self.store.write().await;

        for item in collections.inventory.iter_mut() {
            item.refresh_days_left(today);
        }

        collections.inventory.clone()
    }
}
