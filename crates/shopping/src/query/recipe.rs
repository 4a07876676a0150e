use async_trait::async_trait;
use kitcha_db::table;
use kitcha_shared::{IngredientCategory, Quantity, Recipe, RecipeIngredient, Result, Unit};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use std::str::FromStr;

use crate::provider::RecipeProvider;

#[derive(FromRow)]
struct RecipeRow {
    id: String,
    name: String,
    servings: Option<i64>,
}

#[derive(FromRow)]
struct RecipeIngredientRow {
    name: String,
    quantity: String,
    unit: String,
    category: Option<String>,
    note: Option<String>,
}

impl RecipeIngredientRow {
    fn into_ingredient(self) -> Result<RecipeIngredient> {
        let quantity = Quantity::from_str(&self.quantity)?;
        let unit = Unit::parse(&self.unit)?;
        let mut ingredient = RecipeIngredient::new(self.name, quantity, unit)?;

        if let Some(category) = self
            .category
            .as_deref()
            .and_then(|c| IngredientCategory::from_str(c).ok())
        {
            ingredient = ingredient.with_category(category);
        }

        if let Some(note) = self.note.filter(|n| !n.trim().is_empty()) {
            ingredient = ingredient.with_note(note);
        }

        Ok(ingredient)
    }
}

#[async_trait]
impl RecipeProvider for super::Query {
    async fn get_recipe(&self, recipe_id: &str) -> Result<Option<Recipe>> {
        let statement = sea_query::Query::select()
            .columns([table::Recipe::Id, table::Recipe::Name, table::Recipe::Servings])
            .from(table::Recipe::Table)
            .and_where(Expr::col(table::Recipe::Id).eq(recipe_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let Some(row) = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?
        else {
            return Ok(None);
        };

        let statement = sea_query::Query::select()
            .columns([
                table::RecipeIngredient::Name,
                table::RecipeIngredient::Quantity,
                table::RecipeIngredient::Unit,
                table::RecipeIngredient::Category,
                table::RecipeIngredient::Note,
            ])
            .from(table::RecipeIngredient::Table)
            .and_where(Expr::col(table::RecipeIngredient::RecipeId).eq(recipe_id))
            .order_by(table::RecipeIngredient::Position, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecipeIngredientRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        // One unreadable line makes the whole recipe unresolved.
        let mut ingredients = Vec::with_capacity(rows.len());
        for row in rows {
            match row.into_ingredient() {
                Ok(ingredient) => ingredients.push(ingredient),
                Err(err) => {
                    tracing::warn!(recipe_id, "unusable recipe ingredient: {err}");
                    return Ok(None);
                }
            }
        }

        let servings = row.servings.and_then(|s| u32::try_from(s).ok());

        match Recipe::new(row.id, row.name, servings, ingredients) {
            Ok(recipe) => Ok(Some(recipe)),
            Err(err) => {
                tracing::warn!(recipe_id, "unusable recipe: {err}");
                Ok(None)
            }
        }
    }
}
