use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    UserId,
    Name,
    Servings,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum RecipeIngredient {
    Table,
    RecipeId,
    Position,
    Name,
    Quantity,
    Unit,
    Category,
    Note,
}

#[derive(Iden, Clone)]
pub enum MealPlan {
    Table,
    Id,
    UserId,
    Name,
    WeekStart,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum MealPlanEntry {
    Table,
    MealPlanId,
    Position,
    RecipeId,
    Day,
    MealType,
    Servings,
}

#[derive(Iden, Clone)]
pub enum PantryItem {
    Table,
    Id,
    UserId,
    Name,
    Category,
    Quantity,
    Unit,
    ExpiresOn,
    Location,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum IngredientPrice {
    Table,
    Name,
    Unit,
    UnitCostCents,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum BudgetPreference {
    Table,
    UserId,
    WeeklyBudgetCents,
    AlertEnabled,
    AlertThreshold,
    Timezone,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum CostRecord {
    Table,
    Id,
    UserId,
    AmountCents,
    OccurredAt,
    Source,
}
