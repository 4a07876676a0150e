use async_trait::async_trait;
use kitcha_shared::{MealPlanEntry, PantryItem, Recipe, Result};

#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Recipe with its ingredients, `None` when it no longer exists or cannot
    /// be read in full.
    async fn get_recipe(&self, recipe_id: &str) -> Result<Option<Recipe>>;
}

/// Readable entries of a meal plan, in plan order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealPlanEntries {
    pub entries: Vec<MealPlanEntry>,
    /// Stored entries that failed validation and were left out
    pub invalid: usize,
}

#[async_trait]
pub trait MealPlanProvider: Send + Sync {
    /// Entries of a meal plan owned by `user_id`, `None` when there is no such plan.
    async fn get_entries(
        &self,
        user_id: &str,
        meal_plan_id: &str,
    ) -> Result<Option<MealPlanEntries>>;
}

#[async_trait]
pub trait PantryProvider: Send + Sync {
    async fn get_snapshot(&self, user_id: &str) -> Result<Vec<PantryItem>>;
}
