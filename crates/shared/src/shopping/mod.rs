use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::OffsetDateTime;

/// Where a shopping entry came from.
#[derive(
    Serialize,
    Deserialize,
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Source {
    #[default]
    Manual,
    Recipe,
    MealPlan,
}

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub unit: String,
    pub completed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub source: Source,
    pub recipe_id: Option<String>,
    #[serde(default)]
    pub priority: Priority,
}

impl ShoppingItem {
    /// Uncompleted entries are the ones every dedup check looks at.
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
