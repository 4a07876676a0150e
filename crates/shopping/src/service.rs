use std::{collections::HashMap, sync::Arc};

use kitcha_shared::{Recipe, Result};
use sqlx::SqlitePool;

use crate::{
    aggregation::{IngredientAggregationService, ScheduledMeal},
    pricing::{PriceEstimator, ShoppingList, estimate},
    provider::{MealPlanProvider, PantryProvider, RecipeProvider},
    query::Query,
};

/// Builds shopping lists from a meal plan, the pantry and the price table.
#[derive(Clone)]
pub struct ShoppingListService {
    recipes: Arc<dyn RecipeProvider>,
    meal_plans: Arc<dyn MealPlanProvider>,
    pantry: Arc<dyn PantryProvider>,
    prices: Arc<dyn PriceEstimator>,
}

impl ShoppingListService {
    pub fn new(
        recipes: Arc<dyn RecipeProvider>,
        meal_plans: Arc<dyn MealPlanProvider>,
        pantry: Arc<dyn PantryProvider>,
        prices: Arc<dyn PriceEstimator>,
    ) -> Self {
        Self {
            recipes,
            meal_plans,
            pantry,
            prices,
        }
    }

    pub fn sqlite(read_db: SqlitePool) -> Self {
        let query = Arc::new(Query::new(read_db));

        Self::new(query.clone(), query.clone(), query.clone(), query)
    }

    pub async fn shopping_list(&self, user_id: &str, meal_plan_id: &str) -> Result<ShoppingList> {
        let Some(plan) = self.meal_plans.get_entries(user_id, meal_plan_id).await? else {
            kitcha_shared::not_found!("meal plan {meal_plan_id}");
        };

        let mut recipes: HashMap<String, Option<Recipe>> = HashMap::new();
        let mut meals = Vec::with_capacity(plan.entries.len());

        for entry in plan.entries {
            let recipe = match recipes.get(entry.recipe_id()) {
                Some(recipe) => recipe.clone(),
                None => {
                    let recipe = self.recipes.get_recipe(entry.recipe_id()).await?;
                    recipes.insert(entry.recipe_id().to_owned(), recipe.clone());
                    recipe
                }
            };

            if recipe.is_none() {
                tracing::warn!(
                    meal_plan_id,
                    recipe_id = entry.recipe_id(),
                    day = entry.day(),
                    "meal plan entry references a missing recipe"
                );
            }

            meals.push(ScheduledMeal { entry, recipe });
        }

        let pantry = self.pantry.get_snapshot(user_id).await?;
        let mut aggregation = IngredientAggregationService::aggregate(&meals, &pantry);
        aggregation.skipped += plan.invalid;
        let list = estimate(aggregation, self.prices.as_ref()).await;

        tracing::debug!(
            user_id,
            meal_plan_id,
            items = list.items.len(),
            skipped = list.skipped_count,
            unpriced = list.unpriced_count,
            "shopping list built"
        );

        Ok(list)
    }
}
