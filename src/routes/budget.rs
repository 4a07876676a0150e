use axum::{Json, extract::State};
use kitcha_budget::{AlertDecision, BudgetStatus};

use crate::{auth::AuthUser, error::AppError, routes::AppState};

/// GET /analytics/budget-status
#[tracing::instrument(skip(state))]
pub async fn status(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<BudgetStatus>, AppError> {
    Ok(Json(state.budget.status(&user_id).await?))
}

/// GET /analytics/budget-alert
#[tracing::instrument(skip(state))]
pub async fn alert(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<AlertDecision>, AppError> {
    Ok(Json(state.budget.alert(&user_id).await?))
}
