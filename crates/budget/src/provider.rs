use async_trait::async_trait;

use crate::{BudgetConfiguration, BudgetResult, CostRecord, Week};

#[async_trait]
pub trait CostRecordProvider: Send + Sync {
    /// Grocery spend recorded for `user_id` between the week bounds.
    async fn get_for_week(&self, user_id: &str, week: &Week) -> BudgetResult<Vec<CostRecord>>;
}

#[async_trait]
pub trait BudgetConfigProvider: Send + Sync {
    async fn get_config(&self, user_id: &str) -> BudgetResult<Option<BudgetConfiguration>>;
}
