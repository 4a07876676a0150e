use std::sync::Arc;

use sqlx::SqlitePool;
use time::OffsetDateTime;

use crate::{
    AlertDecision, BudgetConfigProvider, BudgetConfiguration, BudgetError, BudgetResult,
    BudgetStatus, CostRecordProvider, Query, Week, evaluate, should_alert, week,
};

/// Loads a user's budget and spend, then evaluates the current week.
#[derive(Clone)]
pub struct BudgetService {
    configs: Arc<dyn BudgetConfigProvider>,
    costs: Arc<dyn CostRecordProvider>,
    default_timezone: String,
}

impl BudgetService {
    pub fn new(
        configs: Arc<dyn BudgetConfigProvider>,
        costs: Arc<dyn CostRecordProvider>,
        default_timezone: impl Into<String>,
    ) -> Self {
        Self {
            configs,
            costs,
            default_timezone: default_timezone.into(),
        }
    }

    pub fn sqlite(read_db: SqlitePool, default_timezone: impl Into<String>) -> Self {
        let query = Arc::new(Query::new(read_db));

        Self::new(query.clone(), query, default_timezone)
    }

    pub async fn status(&self, user_id: &str) -> BudgetResult<BudgetStatus> {
        self.status_at(user_id, OffsetDateTime::now_utc()).await
    }

    pub async fn status_at(&self, user_id: &str, at: OffsetDateTime) -> BudgetResult<BudgetStatus> {
        let config = self.config(user_id).await?;
        self.evaluate_at(user_id, &config, at).await
    }

    pub async fn alert(&self, user_id: &str) -> BudgetResult<AlertDecision> {
        self.alert_at(user_id, OffsetDateTime::now_utc()).await
    }

    pub async fn alert_at(&self, user_id: &str, at: OffsetDateTime) -> BudgetResult<AlertDecision> {
        let config = self.config(user_id).await?;
        let status = self.evaluate_at(user_id, &config, at).await?;
        let decision = should_alert(&status, &config);

        tracing::debug!(
            user_id,
            fire = decision.fire,
            severity = %decision.severity,
            "budget alert evaluated"
        );

        Ok(decision)
    }

    async fn config(&self, user_id: &str) -> BudgetResult<BudgetConfiguration> {
        self.configs
            .get_config(user_id)
            .await?
            .ok_or_else(|| BudgetError::NotConfigured(user_id.to_owned()))
    }

    async fn evaluate_at(
        &self,
        user_id: &str,
        config: &BudgetConfiguration,
        at: OffsetDateTime,
    ) -> BudgetResult<BudgetStatus> {
        let timezone = match config.timezone.as_deref() {
            Some(tz) if week::is_known_timezone(tz) => tz,
            Some(tz) => {
                tracing::warn!(user_id, timezone = tz, "unknown time zone, using default");
                self.default_timezone.as_str()
            }
            None => self.default_timezone.as_str(),
        };

        let week = Week::containing(at, timezone)?;
        let records = self.costs.get_for_week(user_id, &week).await?;
        let status = evaluate(config, &records, &week)?;

        tracing::debug!(
            user_id,
            timezone,
            spent = status.spent_this_week_cents,
            status = %status.status,
            "budget evaluated"
        );

        Ok(status)
    }
}
