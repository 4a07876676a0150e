mod mealplan;
mod pantry;
mod price;
mod recipe;

use sqlx::SqlitePool;

/// SQLite backed providers for recipes, meal plans, pantry and prices.
#[derive(Clone)]
pub struct Query {
    read_db: SqlitePool,
}

impl Query {
    pub fn new(read_db: SqlitePool) -> Self {
        Self { read_db }
    }
}
