use sea_query::{ColumnDef, Index, Table, TableCreateStatement, TableDropStatement};

use crate::table::{MealPlan, MealPlanEntry};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(MealPlan::Table)
        .col(
            ColumnDef::new(MealPlan::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(MealPlan::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(MealPlan::Name).string().not_null())
        .col(ColumnDef::new(MealPlan::WeekStart).big_integer().not_null())
        .col(ColumnDef::new(MealPlan::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(MealPlan::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateEntryTable;

fn create_entry_table() -> TableCreateStatement {
    Table::create()
        .table(MealPlanEntry::Table)
        .col(
            ColumnDef::new(MealPlanEntry::MealPlanId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(MealPlanEntry::Position).integer().not_null())
        .col(
            ColumnDef::new(MealPlanEntry::RecipeId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(MealPlanEntry::Day).integer().not_null())
        .col(
            ColumnDef::new(MealPlanEntry::MealType)
                .string()
                .not_null()
                .string_len(15),
        )
        .col(
            ColumnDef::new(MealPlanEntry::Servings)
                .integer()
                .not_null()
                .default(1),
        )
        .primary_key(
            Index::create()
                .col(MealPlanEntry::MealPlanId)
                .col(MealPlanEntry::Position),
        )
        .to_owned()
}

fn drop_entry_table() -> TableDropStatement {
    Table::drop().table(MealPlanEntry::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateEntryTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_entry_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_entry_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
