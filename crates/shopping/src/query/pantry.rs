use async_trait::async_trait;
use kitcha_db::table;
use kitcha_shared::{IngredientCategory, PantryItem, Quantity, Result, Unit};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use std::str::FromStr;
use time::{Date, macros::format_description};

use crate::provider::PantryProvider;

#[derive(FromRow)]
struct PantryItemRow {
    name: String,
    category: String,
    quantity: String,
    unit: String,
    expires_on: Option<String>,
    location: Option<String>,
}

impl PantryItemRow {
    fn into_item(self) -> Result<PantryItem> {
        let quantity = Quantity::from_str(&self.quantity)?;
        let unit = Unit::parse(&self.unit)?;
        let category = IngredientCategory::from_str(&self.category).unwrap_or_default();
        let mut item = PantryItem::new(self.name, category, quantity, unit)?;

        if let Some(expires_on) = self.expires_on.filter(|d| !d.is_empty()) {
            let Ok(date) = Date::parse(&expires_on, format_description!("[year]-[month]-[day]"))
            else {
                kitcha_shared::invalid!("expiry date", "'{expires_on}' is not YYYY-MM-DD");
            };

            item = item.with_expiry(date);
        }

        if let Some(location) = self.location.filter(|l| !l.trim().is_empty()) {
            item = item.with_location(location);
        }

        Ok(item)
    }
}

#[async_trait]
impl PantryProvider for super::Query {
    async fn get_snapshot(&self, user_id: &str) -> Result<Vec<PantryItem>> {
        let statement = sea_query::Query::select()
            .columns([
                table::PantryItem::Name,
                table::PantryItem::Category,
                table::PantryItem::Quantity,
                table::PantryItem::Unit,
                table::PantryItem::ExpiresOn,
                table::PantryItem::Location,
            ])
            .from(table::PantryItem::Table)
            .and_where(Expr::col(table::PantryItem::UserId).eq(user_id))
            .order_by(table::PantryItem::Name, Order::Asc)
            .order_by(table::PantryItem::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, PantryItemRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            match row.into_item() {
                Ok(item) => items.push(item),
                Err(err) => tracing::warn!(user_id, "skipping pantry item: {err}"),
            }
        }

        Ok(items)
    }
}
