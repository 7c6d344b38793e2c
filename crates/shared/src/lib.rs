mod command;
mod date;
pub mod inventory;
pub mod mealplan;
pub mod recipe;
pub mod shopping;

pub use command::*;
pub use date::*;

/// New sortable identifier for any stored record.
pub fn new_id() -> String {
    ulid::Ulid::new().to_string()
}
