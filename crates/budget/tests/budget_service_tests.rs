use kitcha_budget::{AlertSeverity, BudgetError, BudgetHealth, BudgetService};
use kitcha_db::table::{BudgetPreference, CostRecord};
use sea_query::{InsertStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use time::{OffsetDateTime, macros::datetime};

async fn setup_test_db() -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    kitcha_db::migrate(&pool).await?;

    Ok(pool)
}

async fn execute(pool: &SqlitePool, statement: InsertStatement) -> anyhow::Result<()> {
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

async fn set_budget(
    pool: &SqlitePool,
    user_id: &str,
    weekly_budget_cents: i64,
    alert_threshold: i64,
    timezone: Option<&str>,
) -> anyhow::Result<()> {
    let statement = sea_query::Query::insert()
        .into_table(BudgetPreference::Table)
        .columns([
            BudgetPreference::UserId,
            BudgetPreference::WeeklyBudgetCents,
            BudgetPreference::AlertEnabled,
            BudgetPreference::AlertThreshold,
            BudgetPreference::Timezone,
            BudgetPreference::UpdatedAt,
        ])
        .values_panic([
            user_id.into(),
            weekly_budget_cents.into(),
            true.into(),
            alert_threshold.into(),
            timezone.map(|tz| tz.to_owned()).into(),
            0.into(),
        ])
        .to_owned();

    execute(pool, statement).await
}

async fn record_cost(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
    amount_cents: i64,
    occurred_at: OffsetDateTime,
) -> anyhow::Result<()> {
    let statement = sea_query::Query::insert()
        .into_table(CostRecord::Table)
        .columns([
            CostRecord::Id,
            CostRecord::UserId,
            CostRecord::AmountCents,
            CostRecord::OccurredAt,
            CostRecord::Source,
        ])
        .values_panic([
            id.into(),
            user_id.into(),
            amount_cents.into(),
            occurred_at.unix_timestamp().into(),
            "receipt".into(),
        ])
        .to_owned();

    execute(pool, statement).await
}

#[tokio::test]
async fn test_status_counts_current_week_only() -> anyhow::Result<()> {
    let pool = setup_test_db().await?;

    set_budget(&pool, "john", 100_000, 80, None).await?;
    record_cost(&pool, "c1", "john", 50_000, datetime!(2025-01-20 08:00:00 UTC)).await?;
    record_cost(&pool, "c2", "john", 35_000, datetime!(2025-01-24 19:00:00 UTC)).await?;
    record_cost(&pool, "c3", "john", 90_000, datetime!(2025-01-17 12:00:00 UTC)).await?;
    record_cost(&pool, "c4", "jane", 90_000, datetime!(2025-01-21 12:00:00 UTC)).await?;

    let service = BudgetService::sqlite(pool, "UTC");
    let status = service
        .status_at("john", datetime!(2025-01-25 10:00:00 UTC))
        .await?;

    assert_eq!(status.spent_this_week_cents, 85_000);
    assert_eq!(status.remaining_cents, 15_000);
    assert_eq!(status.percentage_used, 85.0);
    assert_eq!(status.status, BudgetHealth::Warning);
    assert_eq!(status.week_start, datetime!(2025-01-20 00:00:00 UTC));

    Ok(())
}

#[tokio::test]
async fn test_status_uses_user_time_zone() -> anyhow::Result<()> {
    let pool = setup_test_db().await?;

    set_budget(&pool, "john", 10_000, 80, Some("Asia/Manila")).await?;
    // Monday 01:00 in Manila, still Sunday in UTC
    record_cost(&pool, "c1", "john", 2_000, datetime!(2025-01-19 17:00:00 UTC)).await?;
    record_cost(&pool, "c2", "john", 3_000, datetime!(2025-01-19 15:00:00 UTC)).await?;

    let service = BudgetService::sqlite(pool, "UTC");
    let status = service
        .status_at("john", datetime!(2025-01-20 04:00:00 UTC))
        .await?;

    assert_eq!(status.spent_this_week_cents, 2_000);
    assert_eq!(status.week_start, datetime!(2025-01-20 00:00:00 +08:00));
    assert_eq!(status.status, BudgetHealth::Healthy);

    Ok(())
}

#[tokio::test]
async fn test_status_week_across_daylight_saving_change() -> anyhow::Result<()> {
    let pool = setup_test_db().await?;

    set_budget(&pool, "john", 10_000, 80, Some("America/New_York")).await?;
    // Sunday 2025-03-02 23:30 EST, the week before
    record_cost(&pool, "c1", "john", 4_000, datetime!(2025-03-03 04:30:00 UTC)).await?;
    // Monday 2025-03-03 00:00 EST
    record_cost(&pool, "c2", "john", 1_000, datetime!(2025-03-03 05:00:00 UTC)).await?;
    // Sunday 2025-03-09 23:59:59 EDT
    record_cost(&pool, "c3", "john", 2_000, datetime!(2025-03-10 03:59:59 UTC)).await?;

    let service = BudgetService::sqlite(pool, "UTC");
    let status = service
        .status_at("john", datetime!(2025-03-09 12:00:00 UTC))
        .await?;

    assert_eq!(status.spent_this_week_cents, 3_000);
    assert_eq!(status.week_start, datetime!(2025-03-03 05:00:00 UTC));
    assert_eq!(status.week_end, datetime!(2025-03-10 03:59:59 UTC));

    Ok(())
}

#[tokio::test]
async fn test_status_without_configuration() -> anyhow::Result<()> {
    let pool = setup_test_db().await?;
    let service = BudgetService::sqlite(pool, "UTC");

    assert!(matches!(
        service.status("john").await,
        Err(BudgetError::NotConfigured(_))
    ));

    Ok(())
}

#[tokio::test]
async fn test_status_with_zero_budget() -> anyhow::Result<()> {
    let pool = setup_test_db().await?;

    set_budget(&pool, "john", 0, 80, None).await?;

    let service = BudgetService::sqlite(pool, "UTC");

    assert!(matches!(
        service.status("john").await,
        Err(BudgetError::InvalidConfiguration(_))
    ));

    Ok(())
}

#[tokio::test]
async fn test_alert_fires_past_threshold() -> anyhow::Result<()> {
    let pool = setup_test_db().await?;

    set_budget(&pool, "john", 10_000, 50, None).await?;
    record_cost(&pool, "c1", "john", 6_000, datetime!(2025-01-21 12:00:00 UTC)).await?;

    let service = BudgetService::sqlite(pool.clone(), "UTC");
    let decision = service
        .alert_at("john", datetime!(2025-01-22 12:00:00 UTC))
        .await?;

    assert!(decision.fire);
    assert_eq!(decision.severity, AlertSeverity::Warning);
    assert_eq!(decision.status, BudgetHealth::Healthy);
    assert_eq!(decision.threshold_percentage, 50);

    record_cost(&pool, "c2", "john", 4_000, datetime!(2025-01-22 09:00:00 UTC)).await?;

    let decision = service
        .alert_at("john", datetime!(2025-01-22 12:00:00 UTC))
        .await?;

    assert!(decision.fire);
    assert_eq!(decision.severity, AlertSeverity::Exceeded);
    assert_eq!(decision.status, BudgetHealth::Exceeded);

    Ok(())
}
