#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use kitcha::config::{BudgetConfig, Config, DatabaseConfig, ObservabilityConfig, ServerConfig};
use kitcha_db::table;
use sea_query::{InsertStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use time::OffsetDateTime;
use tower::ServiceExt;

pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    kitcha_db::migrate(&pool).await.unwrap();

    pool
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        observability: ObservabilityConfig::default(),
        budget: BudgetConfig::default(),
    }
}

pub fn create_test_app(pool: SqlitePool) -> Router {
    kitcha::router(kitcha::AppState::new(&test_config(), pool))
}

/// Sends a GET request, as `user_id` when given, and returns status and JSON body
pub async fn get(
    app: &Router,
    uri: &str,
    user_id: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut request = Request::builder().uri(uri);
    if let Some(user_id) = user_id {
        request = request.header(kitcha::auth::USER_ID_HEADER, user_id);
    }

    let response = app
        .clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);

    (status, json)
}

async fn execute(pool: &SqlitePool, statement: InsertStatement) {
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await.unwrap();
}

pub async fn create_recipe(
    pool: &SqlitePool,
    id: &str,
    name: &str,
    ingredients: &[(&str, &str, &str)],
) {
    let statement = sea_query::Query::insert()
        .into_table(table::Recipe::Table)
        .columns([
            table::Recipe::Id,
            table::Recipe::UserId,
            table::Recipe::Name,
            table::Recipe::CreatedAt,
        ])
        .values_panic([id.into(), "john".into(), name.into(), 0.into()])
        .to_owned();

    execute(pool, statement).await;

    for (position, (name, quantity, unit)) in ingredients.iter().enumerate() {
        let statement = sea_query::Query::insert()
            .into_table(table::RecipeIngredient::Table)
            .columns([
                table::RecipeIngredient::RecipeId,
                table::RecipeIngredient::Position,
                table::RecipeIngredient::Name,
                table::RecipeIngredient::Quantity,
                table::RecipeIngredient::Unit,
            ])
            .values_panic([
                id.into(),
                (position as i64).into(),
                (*name).into(),
                (*quantity).into(),
                (*unit).into(),
            ])
            .to_owned();

        execute(pool, statement).await;
    }
}

pub async fn create_meal_plan(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
    entries: &[(&str, i64)],
) {
    let statement = sea_query::Query::insert()
        .into_table(table::MealPlan::Table)
        .columns([
            table::MealPlan::Id,
            table::MealPlan::UserId,
            table::MealPlan::Name,
            table::MealPlan::WeekStart,
            table::MealPlan::CreatedAt,
        ])
        .values_panic([
            id.into(),
            user_id.into(),
            "This week".into(),
            0.into(),
            0.into(),
        ])
        .to_owned();

    execute(pool, statement).await;

    for (position, (recipe_id, servings)) in entries.iter().enumerate() {
        let statement = sea_query::Query::insert()
            .into_table(table::MealPlanEntry::Table)
            .columns([
                table::MealPlanEntry::MealPlanId,
                table::MealPlanEntry::Position,
                table::MealPlanEntry::RecipeId,
                table::MealPlanEntry::Day,
                table::MealPlanEntry::MealType,
                table::MealPlanEntry::Servings,
            ])
            .values_panic([
                id.into(),
                (position as i64).into(),
                (*recipe_id).into(),
                ((position % 7) as i64).into(),
                "dinner".into(),
                (*servings).into(),
            ])
            .to_owned();

        execute(pool, statement).await;
    }
}

pub async fn create_pantry_item(
    pool: &SqlitePool,
    user_id: &str,
    name: &str,
    quantity: &str,
    unit: &str,
) {
    let statement = sea_query::Query::insert()
        .into_table(table::PantryItem::Table)
        .columns([
            table::PantryItem::Id,
            table::PantryItem::UserId,
            table::PantryItem::Name,
            table::PantryItem::Category,
            table::PantryItem::Quantity,
            table::PantryItem::Unit,
            table::PantryItem::UpdatedAt,
        ])
        .values_panic([
            format!("{user_id}-{name}").into(),
            user_id.into(),
            name.into(),
            "Grocery".into(),
            quantity.into(),
            unit.into(),
            0.into(),
        ])
        .to_owned();

    execute(pool, statement).await;
}

pub async fn create_price(pool: &SqlitePool, name: &str, unit: &str, cents: i64) {
    let statement = sea_query::Query::insert()
        .into_table(table::IngredientPrice::Table)
        .columns([
            table::IngredientPrice::Name,
            table::IngredientPrice::Unit,
            table::IngredientPrice::UnitCostCents,
            table::IngredientPrice::UpdatedAt,
        ])
        .values_panic([name.into(), unit.into(), cents.into(), 0.into()])
        .to_owned();

    execute(pool, statement).await;
}

pub async fn set_budget(
    pool: &SqlitePool,
    user_id: &str,
    weekly_budget_cents: i64,
    alert_threshold: i64,
) {
    let statement = sea_query::Query::insert()
        .into_table(table::BudgetPreference::Table)
        .columns([
            table::BudgetPreference::UserId,
            table::BudgetPreference::WeeklyBudgetCents,
            table::BudgetPreference::AlertEnabled,
            table::BudgetPreference::AlertThreshold,
            table::BudgetPreference::UpdatedAt,
        ])
        .values_panic([
            user_id.into(),
            weekly_budget_cents.into(),
            true.into(),
            alert_threshold.into(),
            0.into(),
        ])
        .to_owned();

    execute(pool, statement).await;
}

pub async fn record_cost(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
    amount_cents: i64,
    occurred_at: OffsetDateTime,
) {
    let statement = sea_query::Query::insert()
        .into_table(table::CostRecord::Table)
        .columns([
            table::CostRecord::Id,
            table::CostRecord::UserId,
            table::CostRecord::AmountCents,
            table::CostRecord::OccurredAt,
            table::CostRecord::Source,
        ])
        .values_panic([
            id.into(),
            user_id.into(),
            amount_cents.into(),
            occurred_at.unix_timestamp().into(),
            "receipt".into(),
        ])
        .to_owned();

    execute(pool, statement).await;
}
