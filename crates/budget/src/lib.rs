mod error;
mod evaluator;
mod provider;
mod query;
mod service;
pub mod week;

pub use error::{BudgetError, BudgetResult};
pub use evaluator::{
    AlertDecision, AlertSeverity, BudgetConfiguration, BudgetHealth, BudgetStatus, CostRecord,
    DEFAULT_ALERT_THRESHOLD, EXCEEDED_PERCENTAGE, WARNING_PERCENTAGE, evaluate, should_alert,
};
pub use provider::{BudgetConfigProvider, CostRecordProvider};
pub use query::Query;
pub use service::BudgetService;
pub use week::Week;
