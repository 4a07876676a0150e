use async_trait::async_trait;
use kitcha_db::table;
use kitcha_shared::{MealPlanEntry, MealType, Result};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use std::str::FromStr;

use crate::provider::{MealPlanEntries, MealPlanProvider};

#[derive(FromRow)]
struct MealPlanEntryRow {
    recipe_id: String,
    day: i64,
    meal_type: String,
    servings: i64,
}

impl MealPlanEntryRow {
    fn into_entry(self) -> Result<MealPlanEntry> {
        let Ok(day) = u8::try_from(self.day) else {
            kitcha_shared::invalid!("day", "{} is outside 0..=6", self.day);
        };

        let Ok(meal_type) = MealType::from_str(&self.meal_type) else {
            kitcha_shared::invalid!("meal type", "unknown meal type '{}'", self.meal_type);
        };

        let Ok(servings) = u32::try_from(self.servings) else {
            kitcha_shared::invalid!("servings", "{} is not a valid count", self.servings);
        };

        MealPlanEntry::new(self.recipe_id, day, meal_type, servings)
    }
}

#[async_trait]
impl MealPlanProvider for super::Query {
    async fn get_entries(
        &self,
        user_id: &str,
        meal_plan_id: &str,
    ) -> Result<Option<MealPlanEntries>> {
        let statement = sea_query::Query::select()
            .column(table::MealPlan::Id)
            .from(table::MealPlan::Table)
            .and_where(Expr::col(table::MealPlan::Id).eq(meal_plan_id))
            .and_where(Expr::col(table::MealPlan::UserId).eq(user_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let exists = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        if exists.is_none() {
            return Ok(None);
        }

        let statement = sea_query::Query::select()
            .columns([
                table::MealPlanEntry::RecipeId,
                table::MealPlanEntry::Day,
                table::MealPlanEntry::MealType,
                table::MealPlanEntry::Servings,
            ])
            .from(table::MealPlanEntry::Table)
            .and_where(Expr::col(table::MealPlanEntry::MealPlanId).eq(meal_plan_id))
            .order_by(table::MealPlanEntry::Position, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, MealPlanEntryRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let mut plan = MealPlanEntries {
            entries: Vec::with_capacity(rows.len()),
            invalid: 0,
        };

        for row in rows {
            match row.into_entry() {
                Ok(entry) => plan.entries.push(entry),
                Err(err) => {
                    tracing::warn!(meal_plan_id, "skipping meal plan entry: {err}");
                    plan.invalid += 1;
                }
            }
        }

        Ok(Some(plan))
    }
}
