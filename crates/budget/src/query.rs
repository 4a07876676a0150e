use async_trait::async_trait;
use kitcha_db::table::{BudgetPreference, CostRecord as CostRecordTable};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;

use crate::{
    BudgetConfigProvider, BudgetConfiguration, BudgetResult, CostRecord, CostRecordProvider, Week,
};

#[derive(FromRow)]
struct BudgetPreferenceRow {
    weekly_budget_cents: i64,
    alert_enabled: bool,
    alert_threshold: i64,
    timezone: Option<String>,
}

#[derive(FromRow)]
struct CostRecordRow {
    id: String,
    amount_cents: i64,
    occurred_at: i64,
}

/// SQLite backed budget preferences and cost records.
#[derive(Clone)]
pub struct Query {
    read_db: SqlitePool,
}

impl Query {
    pub fn new(read_db: SqlitePool) -> Self {
        Self { read_db }
    }
}

#[async_trait]
impl BudgetConfigProvider for Query {
    async fn get_config(&self, user_id: &str) -> BudgetResult<Option<BudgetConfiguration>> {
        let statement = sea_query::Query::select()
            .columns([
                BudgetPreference::WeeklyBudgetCents,
                BudgetPreference::AlertEnabled,
                BudgetPreference::AlertThreshold,
                BudgetPreference::Timezone,
            ])
            .from(BudgetPreference::Table)
            .and_where(Expr::col(BudgetPreference::UserId).eq(user_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, BudgetPreferenceRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.map(|row| BudgetConfiguration {
            weekly_budget_cents: row.weekly_budget_cents,
            alert_enabled: row.alert_enabled,
            alert_threshold: row.alert_threshold,
            timezone: row.timezone.filter(|tz| !tz.trim().is_empty()),
        }))
    }
}

#[async_trait]
impl CostRecordProvider for Query {
    async fn get_for_week(&self, user_id: &str, week: &Week) -> BudgetResult<Vec<CostRecord>> {
        let statement = sea_query::Query::select()
            .columns([
                CostRecordTable::Id,
                CostRecordTable::AmountCents,
                CostRecordTable::OccurredAt,
            ])
            .from(CostRecordTable::Table)
            .and_where(Expr::col(CostRecordTable::UserId).eq(user_id))
            .and_where(Expr::col(CostRecordTable::OccurredAt).gte(week.start.unix_timestamp()))
            .and_where(Expr::col(CostRecordTable::OccurredAt).lte(week.end.unix_timestamp()))
            .order_by(CostRecordTable::OccurredAt, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, CostRecordRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let record = OffsetDateTime::from_unix_timestamp(row.occurred_at)
                .map_err(|err| err.to_string())
                .and_then(|occurred_at| {
                    CostRecord::new(row.amount_cents, occurred_at).map_err(|err| err.to_string())
                });

            match record {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!(user_id, cost_record = %row.id, "skipping cost record: {err}")
                }
            }
        }

        Ok(records)
    }
}
