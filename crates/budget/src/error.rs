#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    #[error("invalid budget configuration: {0}")]
    InvalidConfiguration(String),

    #[error("no budget configured for user {0}")]
    NotConfigured(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<validator::ValidationErrors> for BudgetError {
    fn from(value: validator::ValidationErrors) -> Self {
        Self::InvalidConfiguration(value.to_string())
    }
}

pub type BudgetResult<T> = Result<T, BudgetError>;
