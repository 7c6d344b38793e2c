use serde::{Deserialize, Serialize};

/// Recipe as seen by the shopping engine (read-only).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    /// Free-text ingredient lines, possibly carrying quantity and unit.
    pub ingredients: Vec<String>,
    /// Names already resolved against inventory as absent.
    #[serde(default)]
    pub missing_ingredients: Vec<String>,
}
