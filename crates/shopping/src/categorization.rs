use larder_shared::shopping::ShoppingItem;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Grocery category assigned from an item name.
///
/// Variant order is the display order of grouped lists, `General` last.
#[derive(
    Serialize,
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
pub enum Category {
    Vegetables,
    Fruits,
    Dairy,
    Bakery,
    Meat,
    Seafood,
    Pantry,
    Frozen,
    Beverages,
    Snacks,
    General,
}

impl Category {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

/// Keyword rules, evaluated top to bottom. The first rule owning a keyword
/// that occurs inside the name wins; order is never re-sorted.
const RULES: &[(Category, &[&str])] = &[
    (
        Category::Vegetables,
        &[
            "tomato",
            "onion",
            "garlic",
            "lettuce",
            "carrot",
            "celery",
            "bell pepper",
            "cucumber",
            "zucchini",
            "broccoli",
            "cauliflower",
            "spinach",
            "kale",
            "cabbage",
            "potato",
            "mushroom",
            "green bean",
            "sweetcorn",
            "corn cob",
            "avocado",
            "eggplant",
            "squash",
            "leek",
            "ginger",
            "cilantro",
            "parsley",
            "basil",
        ],
    ),
    (
        Category::Fruits,
        &[
            "apple", "banana", "orange", "lemon", "lime", "berry", "berries", "grape", "mango",
            "melon", "cherry", "cherries", "peach", "pear", "plum", "kiwi",
        ],
    ),
    (
        Category::Dairy,
        &["milk", "cheese", "yogurt", "yoghurt", "butter", "cream", "egg"],
    ),
    (
        Category::Bakery,
        &[
            "bread", "bagel", "baguette", "croissant", "tortilla", "muffin", "bun", "pita",
        ],
    ),
    (
        Category::Meat,
        &[
            "chicken", "beef", "pork", "bacon", "smoked ham", "prosciutto", "salami", "sausage",
            "turkey", "lamb", "steak", "mince", "veal",
        ],
    ),
    (
        Category::Seafood,
        &[
            "fish", "salmon", "tuna", "cod", "shrimp", "prawn", "crab", "lobster", "scallop",
            "mussel",
        ],
    ),
    (
        Category::Pantry,
        &[
            "flour", "sugar", "rice", "pasta", "spaghetti", "noodle", "oat", "salt", "pepper",
            "oil", "vinegar", "sauce", "cumin", "paprika", "cinnamon", "nutmeg", "honey", "bean",
            "lentil", "chickpea", "cereal", "spice",
        ],
    ),
    (Category::Frozen, &["frozen", "ice cube", "popsicle"]),
    (
        Category::Beverages,
        &[
            "juice", "water", "coffee", "tea", "soda", "wine", "beer", "champagne",
        ],
    ),
    (
        Category::Snacks,
        &[
            "chip", "crisp", "cookie", "chocolate", "candy", "cracker", "popcorn", "nut",
        ],
    ),
];

/// Items of one category, in the order they appear on the list.
#[derive(Serialize, Debug, Clone)]
pub struct CategoryGroup {
    pub category: Category,
    pub items: Vec<ShoppingItem>,
}

/// Categorization Service
///
/// Stateless domain service mapping free-text item names to grocery
/// categories with ordered keyword rules. Names matching no rule fall into
/// `General`.
pub struct CategorizationService;

impl CategorizationService {
    pub fn categorize(name: &str) -> Category {
        let normalized = crate::matcher::normalize(name);

        if normalized.is_empty() {
            return Category::General;
        }

        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::General)
    }

    /// Group items by their current category field in rule order.
    ///
    /// Items whose category is not one of [`Category`] land in `General`.
    pub fn group(items: &[ShoppingItem]) -> Vec<CategoryGroup> {
        Category::VARIANTS
            .iter()
            .filter_map(|category| {
                let items = items
                    .iter()
                    .filter(|item| Self::parse(&item.category) == *category)
                    .cloned()
                    .collect::<Vec<_>>();

                (!items.is_empty()).then_some(CategoryGroup {
                    category: *category,
                    items,
                })
            })
            .collect()
    }

    fn parse(value: &str) -> Category {
        value.parse().unwrap_or(Category::General)
    }
}
