use larder_shared::shopping::{Priority, Source};

/// Defaults a producer stamps on the entries it proposes.
///
/// Each generation path keeps its own historical defaults; they are named
/// here instead of being merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemandProfile {
    pub category: &'static str,
    pub quantity: &'static str,
    pub unit: &'static str,
    pub source: Source,
    pub priority: Priority,
    /// Skip candidates already covered by an inventory item.
    pub check_inventory: bool,
}

impl DemandProfile {
    /// Free-text recipe lines scanned for scheduled meals.
    pub const LINE_SCAN: Self = Self {
        category: "General",
        quantity: "1",
        unit: "unit",
        source: Source::MealPlan,
        priority: Priority::Medium,
        check_inventory: true,
    };

    /// A recipe's pre-resolved `missingIngredients`, requested ad hoc.
    pub const RESOLVED_RECIPE: Self = Self {
        category: "Other",
        quantity: "1",
        unit: "item",
        source: Source::Recipe,
        priority: Priority::Medium,
        check_inventory: false,
    };

    /// Pre-resolved `missingIngredients` of this week's meal plans.
    pub const RESOLVED_MEAL_PLAN: Self = Self {
        source: Source::MealPlan,
        ..Self::RESOLVED_RECIPE
    };

    /// Near-expiry inventory; category and unit come from the item.
    pub const REPLENISH: Self = Self {
        category: "General",
        quantity: "1",
        unit: "unit",
        source: Source::MealPlan,
        priority: Priority::High,
        check_inventory: false,
    };

    /// Rows extracted from pasted free text; category is set per row.
    pub const MANUAL_TEXT: Self = Self {
        category: "General",
        quantity: "1",
        unit: "unit",
        source: Source::Manual,
        priority: Priority::Medium,
        check_inventory: false,
    };
}

/// A proposed shopping entry, not yet checked against the list.
#[derive(Debug, Clone, PartialEq)]
pub struct Demand {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub unit: String,
    pub source: Source,
    pub recipe_id: Option<String>,
    pub priority: Priority,
    pub check_inventory: bool,
}

impl Demand {
    pub fn new(name: impl Into<String>, profile: DemandProfile) -> Self {
        Self {
            name: name.into(),
            category: profile.category.to_owned(),
            quantity: profile.quantity.to_owned(),
            unit: profile.unit.to_owned(),
            source: profile.source,
            recipe_id: None,
            priority: profile.priority,
            check_inventory: profile.check_inventory,
        }
    }

    pub fn recipe(mut self, recipe_id: impl Into<String>) -> Self {
        self.recipe_id = Some(recipe_id.into());
        self
    }

    pub fn category(mut self, category: Option<&str>) -> Self {
        if let Some(category) = category.filter(|c| !c.trim().is_empty()) {
            self.category = category.to_owned();
        }
        self
    }

    pub fn unit(mut self, unit: Option<&str>) -> Self {
        if let Some(unit) = unit.filter(|u| !u.trim().is_empty()) {
            self.unit = unit.to_owned();
        }
        self
    }

    pub fn quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = quantity.into();
        self
    }
}
