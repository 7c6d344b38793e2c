use serde::{Deserialize, Serialize};
use time::Date;

/// A pantry/fridge item tracked by the household.
///
/// `days_left` is a snapshot taken when the item was created or last
/// updated. It is not re-derived on read; call
/// [`InventoryItem::refresh_days_left`] when a fresh value is needed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    /// Numeric-as-text, e.g. `"2"`, `"1/2"` or `"0.75"`.
    pub quantity: String,
    pub unit: Option<String>,
    pub category: Option<String>,
    pub expiry_date: Date,
    pub days_left: i64,
}

impl InventoryItem {
    pub fn refresh_days_left(&mut self, today: Date) {
        self.days_left = crate::days_until(self.expiry_date, today);
    }

    pub fn is_expiring_within(&self, days: i64) -> bool {
        self.days_left <= days
    }
}
