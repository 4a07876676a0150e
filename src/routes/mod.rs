use axum::{Router, routing::get};
use kitcha_budget::BudgetService;
use kitcha_shopping::ShoppingListService;
use sqlx::SqlitePool;

mod budget;
mod health;
mod shopping_list;

#[derive(Clone)]
pub struct AppState {
    pub shopping: ShoppingListService,
    pub budget: BudgetService,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: &crate::config::Config, pool: SqlitePool) -> Self {
        Self {
            shopping: ShoppingListService::sqlite(pool.clone()),
            budget: BudgetService::sqlite(pool.clone(), config.budget.timezone.to_owned()),
            pool,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no identity required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route(
            "/mealplans/{id}/shopping-list",
            get(shopping_list::shopping_list),
        )
        .route("/analytics/budget-status", get(budget::status))
        .route("/analytics/budget-alert", get(budget::alert))
        .with_state(app_state)
}
