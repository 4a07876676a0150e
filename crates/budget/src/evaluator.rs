use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use time::OffsetDateTime;
use validator::Validate;

use crate::{BudgetError, BudgetResult, Week};

/// Share of the budget at which the status turns to warning.
pub const WARNING_PERCENTAGE: i64 = 80;
/// Share of the budget at which the status turns to exceeded.
pub const EXCEEDED_PERCENTAGE: i64 = 100;
pub const DEFAULT_ALERT_THRESHOLD: i64 = 80;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BudgetConfiguration {
    #[validate(range(min = 1, message = "Weekly budget must be greater than zero"))]
    pub weekly_budget_cents: i64,

    pub alert_enabled: bool,

    #[validate(range(min = 1, max = 100, message = "Alert threshold must be between 1 and 100"))]
    pub alert_threshold: i64,

    /// IANA time zone the budget week is computed in
    pub timezone: Option<String>,
}

impl BudgetConfiguration {
    pub fn new(weekly_budget_cents: i64) -> Self {
        Self {
            weekly_budget_cents,
            alert_enabled: true,
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
            timezone: None,
        }
    }
}

/// Money spent on groceries at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostRecord {
    amount_cents: i64,
    occurred_at: OffsetDateTime,
}

impl CostRecord {
    pub fn new(amount_cents: i64, occurred_at: OffsetDateTime) -> BudgetResult<Self> {
        if amount_cents < 0 {
            return Err(BudgetError::InvalidConfiguration(format!(
                "cost record amount {amount_cents} is negative"
            )));
        }

        Ok(Self {
            amount_cents,
            occurred_at,
        })
    }

    pub fn amount_cents(&self) -> i64 {
        self.amount_cents
    }

    pub fn occurred_at(&self) -> OffsetDateTime {
        self.occurred_at
    }
}

#[derive(
    EnumString, Display, AsRefStr, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BudgetHealth {
    Healthy,
    Warning,
    Exceeded,
}

#[derive(
    EnumString, Display, AsRefStr, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Warning,
    Exceeded,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub weekly_budget_cents: i64,
    pub spent_this_week_cents: i64,
    /// Negative once the budget is overspent
    pub remaining_cents: i64,
    /// Not clamped, 150.0 means half again over budget
    pub percentage_used: f64,
    pub status: BudgetHealth,
    #[serde(with = "time::serde::rfc3339")]
    pub week_start: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub week_end: OffsetDateTime,
}

impl BudgetStatus {
    /// `spent >= percentage% of budget`, compared without rounding.
    fn reached(&self, percentage: i64) -> bool {
        i128::from(self.spent_this_week_cents) * 100
            >= i128::from(percentage) * i128::from(self.weekly_budget_cents)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDecision {
    pub fire: bool,
    pub severity: AlertSeverity,
    pub status: BudgetHealth,
    pub percentage_used: f64,
    pub threshold_percentage: i64,
}

/// Weekly spend against the configured budget.
///
/// Only records falling inside `week` count. The healthy/warning/exceeded
/// banding is fixed at 80 % and 100 %, independently of the user alert threshold.
pub fn evaluate(
    config: &BudgetConfiguration,
    records: &[CostRecord],
    week: &Week,
) -> BudgetResult<BudgetStatus> {
    config.validate()?;

    let spent_this_week_cents = records
        .iter()
        .filter(|record| week.contains(record.occurred_at))
        .fold(0i64, |spent, record| spent.saturating_add(record.amount_cents));

    let weekly_budget_cents = config.weekly_budget_cents;
    let percentage_used = spent_this_week_cents as f64 * 100.0 / weekly_budget_cents as f64;

    let mut status = BudgetStatus {
        weekly_budget_cents,
        spent_this_week_cents,
        remaining_cents: weekly_budget_cents.saturating_sub(spent_this_week_cents),
        percentage_used,
        status: BudgetHealth::Healthy,
        week_start: week.start,
        week_end: week.end,
    };

    if status.reached(EXCEEDED_PERCENTAGE) {
        status.status = BudgetHealth::Exceeded;
    } else if status.reached(WARNING_PERCENTAGE) {
        status.status = BudgetHealth::Warning;
    }

    Ok(status)
}

/// Whether the user should be alerted about `status`. Holds no state, the
/// same inputs always give the same decision.
pub fn should_alert(status: &BudgetStatus, config: &BudgetConfiguration) -> AlertDecision {
    let severity = if status.reached(EXCEEDED_PERCENTAGE) {
        AlertSeverity::Exceeded
    } else {
        AlertSeverity::Warning
    };

    AlertDecision {
        fire: config.alert_enabled && status.reached(config.alert_threshold),
        severity,
        status: status.status,
        percentage_used: status.percentage_used,
        threshold_percentage: config.alert_threshold,
    }
}
