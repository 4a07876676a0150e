mod ingredient_price;
mod meal_plan;
mod pantry_item;
mod recipe;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "kitcha",
    "m0_1",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        recipe::CreateIngredientTable,
        recipe::CreateUserIdx,
        meal_plan::CreateTable,
        meal_plan::CreateEntryTable,
        pantry_item::CreateTable,
        pantry_item::CreateUserIdx,
        ingredient_price::CreateTable
    ]
);
