use async_trait::async_trait;
use kitcha_db::table;
use kitcha_shared::{Result, Unit, recipe::normalize_name};
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::pricing::PriceEstimator;

#[async_trait]
impl PriceEstimator for super::Query {
    async fn unit_cost(&self, name: &str, unit: Unit) -> Result<Option<i64>> {
        let statement = sea_query::Query::select()
            .column(table::IngredientPrice::UnitCostCents)
            .from(table::IngredientPrice::Table)
            .and_where(Expr::col(table::IngredientPrice::Name).eq(normalize_name(name)))
            .and_where(Expr::col(table::IngredientPrice::Unit).eq(unit.to_string()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let cost = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(cost.map(|(cents,)| cents))
    }
}
