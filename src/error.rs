use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use kitcha_budget::BudgetError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing or empty x-user-id header")]
    Unauthorized,

    #[error(transparent)]
    Shopping(#[from] kitcha_shared::Error),

    #[error(transparent)]
    Budget(#[from] BudgetError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Shopping(kitcha_shared::Error::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Shopping(kitcha_shared::Error::Invalid { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Budget(BudgetError::NotConfigured(_)) => StatusCode::NOT_FOUND,
            AppError::Budget(BudgetError::InvalidConfiguration(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Shopping(kitcha_shared::Error::Unknown(_))
            | AppError::Budget(BudgetError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error: {self:?}");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
