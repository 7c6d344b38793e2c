use crate::demand::{Demand, DemandProfile};
use crate::store::Collections;

/// Items with this many days left or fewer are restocked.
pub const EXPIRY_THRESHOLD_DAYS: i64 = 2;

/// Propose a restock entry for every near-expiry inventory item.
///
/// Reads the stored `days_left` snapshot as-is. Dedup against the active
/// list happens when the demands are appended.
pub fn replenishment_demands(collections: &Collections) -> Vec<Demand> {
    collections
        .inventory
        .iter()
        .filter(|item| item.is_expiring_within(EXPIRY_THRESHOLD_DAYS))
        .map(|item| {
            Demand::new(item.name.to_owned(), DemandProfile::REPLENISH)
                .category(item.category.as_deref())
                .unit(item.unit.as_deref())
        })
        .collect()
}
