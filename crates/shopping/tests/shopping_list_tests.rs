use kitcha_db::table;
use kitcha_shared::{Error, Quantity, Unit};
use kitcha_shopping::ShoppingListService;
use sea_query::{InsertStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

async fn setup_test_db() -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    kitcha_db::migrate(&pool).await?;

    Ok(pool)
}

async fn execute(pool: &SqlitePool, statement: InsertStatement) -> anyhow::Result<()> {
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

async fn create_recipe(
    pool: &SqlitePool,
    id: &str,
    name: &str,
    servings: Option<i64>,
    ingredients: &[(&str, &str, &str, Option<&str>)],
) -> anyhow::Result<()> {
    let statement = sea_query::Query::insert()
        .into_table(table::Recipe::Table)
        .columns([
            table::Recipe::Id,
            table::Recipe::UserId,
            table::Recipe::Name,
            table::Recipe::Servings,
            table::Recipe::CreatedAt,
        ])
        .values_panic([
            id.into(),
            "john".into(),
            name.into(),
            servings.into(),
            0.into(),
        ])
        .to_owned();

    execute(pool, statement).await?;

    for (position, (name, quantity, unit, category)) in ingredients.iter().enumerate() {
        let statement = sea_query::Query::insert()
            .into_table(table::RecipeIngredient::Table)
            .columns([
                table::RecipeIngredient::RecipeId,
                table::RecipeIngredient::Position,
                table::RecipeIngredient::Name,
                table::RecipeIngredient::Quantity,
                table::RecipeIngredient::Unit,
                table::RecipeIngredient::Category,
            ])
            .values_panic([
                id.into(),
                (position as i64).into(),
                (*name).into(),
                (*quantity).into(),
                (*unit).into(),
                category.map(|c| c.to_owned()).into(),
            ])
            .to_owned();

        execute(pool, statement).await?;
    }

    Ok(())
}

async fn create_meal_plan(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
    entries: &[(&str, i64, &str, i64)],
) -> anyhow::Result<()> {
    let statement = sea_query::Query::insert()
        .into_table(table::MealPlan::Table)
        .columns([
            table::MealPlan::Id,
            table::MealPlan::UserId,
            table::MealPlan::Name,
            table::MealPlan::WeekStart,
            table::MealPlan::CreatedAt,
        ])
        .values_panic([
            id.into(),
            user_id.into(),
            "Week".into(),
            0.into(),
            0.into(),
        ])
        .to_owned();

    execute(pool, statement).await?;

    for (position, (recipe_id, day, meal_type, servings)) in entries.iter().enumerate() {
        let statement = sea_query::Query::insert()
            .into_table(table::MealPlanEntry::Table)
            .columns([
                table::MealPlanEntry::MealPlanId,
                table::MealPlanEntry::Position,
                table::MealPlanEntry::RecipeId,
                table::MealPlanEntry::Day,
                table::MealPlanEntry::MealType,
                table::MealPlanEntry::Servings,
            ])
            .values_panic([
                id.into(),
                (position as i64).into(),
                (*recipe_id).into(),
                (*day).into(),
                (*meal_type).into(),
                (*servings).into(),
            ])
            .to_owned();

        execute(pool, statement).await?;
    }

    Ok(())
}

async fn create_pantry_item(
    pool: &SqlitePool,
    id: &str,
    name: &str,
    quantity: &str,
    unit: &str,
) -> anyhow::Result<()> {
    let statement = sea_query::Query::insert()
        .into_table(table::PantryItem::Table)
        .columns([
            table::PantryItem::Id,
            table::PantryItem::UserId,
            table::PantryItem::Name,
            table::PantryItem::Category,
            table::PantryItem::Quantity,
            table::PantryItem::Unit,
            table::PantryItem::UpdatedAt,
        ])
        .values_panic([
            id.into(),
            "john".into(),
            name.into(),
            "Grocery".into(),
            quantity.into(),
            unit.into(),
            0.into(),
        ])
        .to_owned();

    execute(pool, statement).await
}

async fn create_price(pool: &SqlitePool, name: &str, unit: &str, cents: i64) -> anyhow::Result<()> {
    let statement = sea_query::Query::insert()
        .into_table(table::IngredientPrice::Table)
        .columns([
            table::IngredientPrice::Name,
            table::IngredientPrice::Unit,
            table::IngredientPrice::UnitCostCents,
            table::IngredientPrice::UpdatedAt,
        ])
        .values_panic([name.into(), unit.into(), cents.into(), 0.into()])
        .to_owned();

    execute(pool, statement).await
}

#[tokio::test]
async fn test_shopping_list_subtracts_pantry_and_prices_lines() -> anyhow::Result<()> {
    let pool = setup_test_db().await?;

    create_recipe(&pool, "r1", "Recipe A", None, &[("Flour", "2", "cups", None)]).await?;
    create_meal_plan(&pool, "p1", "john", &[("r1", 0, "dinner", 1), ("r1", 3, "lunch", 2)])
        .await?;
    create_pantry_item(&pool, "i1", "flour", "1", "cup").await?;
    create_price(&pool, "flour", "cup", 40).await?;

    let service = ShoppingListService::sqlite(pool);
    let list = service.shopping_list("john", "p1").await?;

    assert_eq!(list.items.len(), 1);
    let flour = &list.items[0];
    assert_eq!(flour.ingredient_name, "Flour");
    assert_eq!(flour.unit, Unit::Cup);
    assert_eq!(flour.quantity, Quantity::from(5));
    assert_eq!(flour.pantry_quantity, Some(Quantity::from(1)));
    assert_eq!(flour.recipes, vec!["Recipe A"]);
    assert_eq!(flour.line_cost_cents, Some(200));
    assert_eq!(list.total_estimated_cost_cents, Some(200));
    assert_eq!(list.skipped_count, 0);

    Ok(())
}

#[tokio::test]
async fn test_shopping_list_skips_missing_recipes() -> anyhow::Result<()> {
    let pool = setup_test_db().await?;

    create_recipe(
        &pool,
        "r1",
        "Salad",
        Some(2),
        &[
            ("Lettuce", "1", "", Some("FruitsAndVegetables")),
            ("olive oil", "2", "tbsp", None),
        ],
    )
    .await?;
    create_recipe(&pool, "r2", "Water", None, &[]).await?;
    create_meal_plan(
        &pool,
        "p1",
        "john",
        &[("r1", 0, "lunch", 4), ("gone", 1, "lunch", 1), ("r2", 2, "snack", 1)],
    )
    .await?;

    let list = ShoppingListService::sqlite(pool)
        .shopping_list("john", "p1")
        .await?;

    assert_eq!(list.skipped_count, 2);
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[0].ingredient_name, "Lettuce");
    assert_eq!(list.items[0].quantity, Quantity::from(2));
    assert_eq!(list.items[1].unit, Unit::Tablespoon);
    assert_eq!(list.items[1].quantity, Quantity::from(4));
    assert_eq!(list.total_estimated_cost_cents, None);
    assert_eq!(list.unpriced_count, 2);

    Ok(())
}

#[tokio::test]
async fn test_shopping_list_counts_invalid_rows_as_skipped() -> anyhow::Result<()> {
    let pool = setup_test_db().await?;

    create_recipe(&pool, "r1", "Toast", None, &[("bread", "2", "slices", None)]).await?;
    create_recipe(
        &pool,
        "r2",
        "Butter toast",
        None,
        &[("bread", "1", "slice", None), ("butter", "a lot", "g", None)],
    )
    .await?;
    create_meal_plan(
        &pool,
        "p1",
        "john",
        &[("r1", 0, "breakfast", 1), ("r1", 9, "brunch", 1), ("r2", 1, "breakfast", 1)],
    )
    .await?;
    create_pantry_item(&pool, "i1", "bread", "not a number", "slice").await?;

    let list = ShoppingListService::sqlite(pool)
        .shopping_list("john", "p1")
        .await?;

    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].ingredient_name, "bread");
    assert_eq!(list.items[0].quantity, Quantity::from(2));
    assert_eq!(list.items[0].pantry_quantity, None);
    assert_eq!(list.skipped_count, 2);

    Ok(())
}

#[tokio::test]
async fn test_shopping_list_empty_plan() -> anyhow::Result<()> {
    let pool = setup_test_db().await?;

    create_meal_plan(&pool, "p1", "john", &[]).await?;

    let list = ShoppingListService::sqlite(pool)
        .shopping_list("john", "p1")
        .await?;

    assert!(list.items.is_empty());
    assert_eq!(list.skipped_count, 0);
    assert_eq!(list.total_estimated_cost_cents, None);

    Ok(())
}

#[tokio::test]
async fn test_shopping_list_of_another_user_is_not_found() -> anyhow::Result<()> {
    let pool = setup_test_db().await?;

    create_meal_plan(&pool, "p1", "john", &[]).await?;

    let service = ShoppingListService::sqlite(pool);

    assert!(matches!(
        service.shopping_list("jane", "p1").await,
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        service.shopping_list("john", "p2").await,
        Err(Error::NotFound(_))
    ));

    Ok(())
}
