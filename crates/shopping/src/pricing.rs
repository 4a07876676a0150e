use async_trait::async_trait;
use kitcha_shared::{IngredientCategory, Quantity, Unit};
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::Serialize;

use crate::aggregation::Aggregation;

/// Source of per-unit grocery prices, in cents.
#[async_trait]
pub trait PriceEstimator: Send + Sync {
    async fn unit_cost(&self, name: &str, unit: Unit) -> kitcha_shared::Result<Option<i64>>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub ingredient_name: String,
    pub quantity: Quantity,
    pub unit: Unit,
    pub recipes: Vec<String>,
    pub category: Option<IngredientCategory>,
    pub pantry_quantity: Option<Quantity>,
    pub unit_cost_cents: Option<i64>,
    pub line_cost_cents: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub items: Vec<ShoppingListItem>,
    pub total_estimated_cost_cents: Option<i64>,
    pub skipped_count: usize,
    pub unpriced_count: usize,
}

/// Cost of buying `quantity` at `unit_cost_cents`, rounded to the nearest cent.
pub fn line_cost(unit_cost_cents: i64, quantity: Quantity) -> Option<i64> {
    if unit_cost_cents < 0 {
        return None;
    }

    Decimal::from(unit_cost_cents)
        .checked_mul(quantity.value())?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// Prices every line of an aggregation.
///
/// A line without a known price keeps a null cost and does not count toward the
/// total; the total itself stays null until at least one line is priced.
pub async fn estimate<P: PriceEstimator + ?Sized>(
    aggregation: Aggregation,
    prices: &P,
) -> ShoppingList {
    let mut items = Vec::with_capacity(aggregation.items.len());
    let mut total: Option<i64> = None;
    let mut unpriced_count = 0;

    for ingredient in aggregation.items {
        let unit_cost = match prices.unit_cost(&ingredient.name, ingredient.unit).await {
            Ok(cost) => cost,
            Err(err) => {
                tracing::warn!(
                    ingredient = %ingredient.name,
                    unit = %ingredient.unit,
                    "price lookup failed: {err}"
                );
                None
            }
        };

        let line_cost_cents = unit_cost.and_then(|cost| line_cost(cost, ingredient.quantity));

        match line_cost_cents {
            Some(cost) => total = Some(total.unwrap_or(0).saturating_add(cost)),
            None => unpriced_count += 1,
        }

        items.push(ShoppingListItem {
            ingredient_name: ingredient.name,
            quantity: ingredient.quantity,
            unit: ingredient.unit,
            recipes: ingredient.recipes,
            category: ingredient.category,
            pantry_quantity: ingredient.pantry_quantity,
            unit_cost_cents: unit_cost.filter(|_| line_cost_cents.is_some()),
            line_cost_cents,
        });
    }

    ShoppingList {
        items,
        total_estimated_cost_cents: total,
        skipped_count: aggregation.skipped,
        unpriced_count,
    }
}
