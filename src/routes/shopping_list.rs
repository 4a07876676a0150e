use axum::{
    Json,
    extract::{Path, State},
};
use kitcha_shopping::ShoppingList;

use crate::{auth::AuthUser, error::AppError, routes::AppState};

/// GET /mealplans/{id}/shopping-list
///
/// Always answers with the lines that could be built; entries pointing at
/// missing recipes only show up in `skippedCount`.
#[tracing::instrument(skip(state))]
pub async fn shopping_list(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(meal_plan_id): Path<String>,
) -> Result<Json<ShoppingList>, AppError> {
    let list = state.shopping.shopping_list(&user_id, &meal_plan_id).await?;

    Ok(Json(list))
}
