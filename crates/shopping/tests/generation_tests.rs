use larder_shared::inventory::InventoryItem;
use larder_shared::mealplan::{MealPlan, MealSlot};
use larder_shared::recipe::Recipe;
use larder_shared::shopping::{Priority, Source};
use larder_shopping::command::{AddItemInput, InventoryInput};
use larder_shopping::{Collections, Command, MealPlanScope, State, Store};
use time::Date;
use time::macros::date;

const TODAY: Date = date!(2025 - 05 - 10);

/// Helper to build a command over pre-seeded collections
fn setup(collections: Collections) -> Command {
    Command::new(State {
        store: Store::new(collections),
        ..State::in_memory()
    })
}

fn inventory(name: &str, days_left: i64) -> InventoryItem {
    InventoryItem {
        id: format!("inv-{name}"),
        name: name.to_owned(),
        quantity: "1".to_owned(),
        unit: None,
        category: None,
        expiry_date: TODAY,
        days_left,
    }
}

fn recipe(id: &str, ingredients: &[&str], missing: &[&str]) -> Recipe {
    Recipe {
        id: id.to_owned(),
        name: format!("Recipe {id}"),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        missing_ingredients: missing.iter().map(|s| s.to_string()).collect(),
    }
}

fn plan(id: &str, date: Date, recipe_id: &str) -> MealPlan {
    MealPlan {
        id: id.to_owned(),
        date,
        meal: MealSlot::Dinner,
        recipe_id: recipe_id.to_owned(),
        servings: 2,
    }
}

#[tokio::test]
async fn test_auto_replenish_is_idempotent() {
    let command = setup(Collections {
        inventory: vec![inventory("Milk", 1), inventory("Rice", 30), inventory("Yogurt", 2)],
        ..Default::default()
    });

    let first = command.auto_replenish().await;
    assert_eq!(first.count, 2);
    assert!(first.created.iter().all(|item| item.priority == Priority::High));
    assert!(first.created.iter().all(|item| item.source == Source::MealPlan));

    let second = command.auto_replenish().await;
    assert_eq!(second.count, 0);
    assert_eq!(command.shopping_list().await.len(), 2);
}

#[tokio::test]
async fn test_blank_inventory_names_never_reach_the_list() {
    let command = setup(Collections {
        inventory: vec![inventory("   ", 0)],
        ..Default::default()
    });

    let rejected = command
        .add_inventory(
            InventoryInput {
                name: " \t ".to_owned(),
                quantity: 1.0,
                unit: None,
                category: None,
                expiry_date: TODAY,
            },
            TODAY,
        )
        .await;
    assert!(matches!(rejected, Err(larder_shared::Error::User(_))));

    assert_eq!(command.auto_replenish().await.count, 0);
    assert_eq!(command.auto_replenish().await.count, 0);
    assert_eq!(command.generate(MealPlanScope::All, TODAY).await.count, 0);
    assert!(command.shopping_list().await.is_empty());
}

#[tokio::test]
async fn test_replenish_skips_item_already_on_list() {
    let command = setup(Collections {
        inventory: vec![inventory("Tomato", 1)],
        ..Default::default()
    });

    command
        .add_item(AddItemInput {
            name: "tomato".to_owned(),
            ..Default::default()
        })
        .await
        .unwrap();

    let generated = command.auto_replenish().await;

    assert_eq!(generated.count, 0);
    assert_eq!(command.shopping_list().await.len(), 1);
}

#[tokio::test]
async fn test_completed_entry_does_not_block_replenishment() {
    let command = setup(Collections {
        inventory: vec![inventory("Milk", 0)],
        ..Default::default()
    });

    let first = command.auto_replenish().await;
    command.toggle_item(&first.created[0].id).await.unwrap();

    let second = command.auto_replenish().await;
    assert_eq!(second.count, 1);
    assert_eq!(command.shopping_list().await.len(), 2);
}

#[tokio::test]
async fn test_generate_dedups_against_active_list() {
    let command = setup(Collections {
        recipes: vec![recipe("r1", &["Tomato 2 pcs", "Onion 1"], &[])],
        meal_plans: vec![plan("p1", TODAY, "r1")],
        ..Default::default()
    });

    command
        .add_item(AddItemInput {
            name: "tomato".to_owned(),
            ..Default::default()
        })
        .await
        .unwrap();

    let generated = command.generate(MealPlanScope::All, TODAY).await;

    assert_eq!(generated.count, 1);
    assert_eq!(generated.created[0].name, "Onion");

    let tomatoes = command
        .shopping_list()
        .await
        .into_iter()
        .filter(|item| item.name.eq_ignore_ascii_case("tomato"))
        .count();
    assert_eq!(tomatoes, 1);
}

#[tokio::test]
async fn test_garlic_line_scan_end_to_end() {
    let command = setup(Collections {
        recipes: vec![recipe("r1", &["Garlic 3 cloves, minced"], &[])],
        meal_plans: vec![plan("p1", TODAY, "r1")],
        ..Default::default()
    });

    let generated = command.generate(MealPlanScope::Week, TODAY).await;

    assert_eq!(generated.count, 1);
    let garlic = &generated.created[0];
    assert_eq!(garlic.name, "Garlic");
    assert_eq!(garlic.category, "General");
    assert_eq!(garlic.quantity, "1");
    assert_eq!(garlic.unit, "unit");
    assert_eq!(garlic.source, Source::MealPlan);
    assert_eq!(garlic.recipe_id.as_deref(), Some("r1"));
    assert_eq!(garlic.priority, Priority::Medium);
    assert!(!garlic.completed);

    assert_eq!(command.generate(MealPlanScope::Week, TODAY).await.count, 0);
}

#[tokio::test]
async fn test_line_scan_skips_ingredients_in_stock() {
    let command = setup(Collections {
        inventory: vec![inventory("Garlic", 20)],
        recipes: vec![recipe("r1", &["garlic 2 cloves", "Basil 1 bunch"], &[])],
        meal_plans: vec![plan("p1", TODAY, "r1")],
        ..Default::default()
    });

    let generated = command.generate(MealPlanScope::All, TODAY).await;

    let names = generated
        .created
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Basil"]);
}

#[tokio::test]
async fn test_weekly_boundary() {
    let command = setup(Collections {
        recipes: vec![
            recipe("near", &[], &["Basil"]),
            recipe("edge", &[], &["Lemon"]),
            recipe("far", &[], &["Saffron"]),
            recipe("past", &[], &["Anchovy"]),
        ],
        meal_plans: vec![
            plan("p1", TODAY, "near"),
            plan("p2", date!(2025 - 05 - 16), "edge"),
            plan("p3", date!(2025 - 05 - 17), "far"),
            plan("p4", date!(2025 - 05 - 09), "past"),
            plan("p5", TODAY, "deleted-recipe"),
        ],
        ..Default::default()
    });

    let generated = command.from_meal_plans(TODAY).await;

    let names = generated
        .created
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Basil", "Lemon"]);
    assert!(generated.created.iter().all(|item| item.unit == "item"));
    assert!(generated.created.iter().all(|item| item.category == "Other"));
}

#[tokio::test]
async fn test_inventory_lifecycle_feeds_replenishment() {
    let command = setup(Collections::default());

    let item = command
        .add_inventory(
            InventoryInput {
                name: "Spinach".to_owned(),
                quantity: 1.5,
                unit: Some("kg".to_owned()),
                category: Some("Vegetables".to_owned()),
                expiry_date: date!(2025 - 05 - 11),
            },
            TODAY,
        )
        .await
        .unwrap();

    assert_eq!(item.days_left, 1);
    assert_eq!(item.quantity, "1 1/2");

    let generated = command.generate(MealPlanScope::All, TODAY).await;
    assert_eq!(generated.count, 1);
    assert_eq!(generated.created[0].unit, "kg");
    assert_eq!(generated.created[0].category, "Vegetables");

    let rejected = command
        .add_inventory(
            InventoryInput {
                name: "Rice".to_owned(),
                quantity: 0.0,
                unit: None,
                category: None,
                expiry_date: TODAY,
            },
            TODAY,
        )
        .await;
    assert!(matches!(rejected, Err(larder_shared::Error::Validate(_))));
    assert_eq!(command.inventory().await.len(), 1);
}

#[tokio::test]
async fn test_concurrent_triggers_create_single_entries() {
    let command = setup(Collections {
        inventory: vec![inventory("Milk", 1), inventory("Bread", 0)],
        recipes: vec![recipe("r1", &["Eggs 6"], &["Eggs"])],
        meal_plans: vec![plan("p1", TODAY, "r1")],
        ..Default::default()
    });

    let triggers = (0..16).map(|i| {
        let command = command.clone();
        tokio::spawn(async move {
            match i % 3 {
                0 => command.auto_replenish().await.count,
                1 => command.generate(MealPlanScope::All, TODAY).await.count,
                _ => command.from_meal_plans(TODAY).await.count,
            }
        })
    });

    let created: usize = futures::future::join_all(triggers)
        .await
        .into_iter()
        .map(|result| result.unwrap())
        .sum();

    let list = command.shopping_list().await;
    assert_eq!(created, list.len());
    assert_eq!(list.len(), 3);

    for name in ["milk", "bread", "eggs"] {
        let count = list
            .iter()
            .filter(|item| item.name.to_lowercase() == name)
            .count();
        assert_eq!(count, 1, "{name} should appear once");
    }
}
