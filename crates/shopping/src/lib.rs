mod aggregation;
mod pricing;
mod provider;
mod query;
mod service;

pub use aggregation::{
    AggregatedIngredient, Aggregation, IngredientAggregationService, ScheduledMeal,
};
pub use pricing::{PriceEstimator, ShoppingList, ShoppingListItem, estimate, line_cost};
pub use provider::{MealPlanEntries, MealPlanProvider, PantryProvider, RecipeProvider};
pub use query::Query;
pub use service::ShoppingListService;
