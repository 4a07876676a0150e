mod error;
pub mod mealplan;
mod pantry;
mod quantity;
pub mod recipe;

pub use error::*;
pub use mealplan::{DEFAULT_SERVINGS, MealPlanEntry, MealType};
pub use pantry::PantryItem;
pub use quantity::Quantity;
pub use recipe::{IngredientCategory, IngredientKey, Recipe, RecipeIngredient, Unit};
