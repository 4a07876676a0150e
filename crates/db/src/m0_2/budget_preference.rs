use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::BudgetPreference;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(BudgetPreference::Table)
        .col(
            ColumnDef::new(BudgetPreference::UserId)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(BudgetPreference::WeeklyBudgetCents)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(BudgetPreference::AlertEnabled)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(BudgetPreference::AlertThreshold)
                .integer()
                .not_null()
                .default(80),
        )
        .col(
            ColumnDef::new(BudgetPreference::Timezone)
                .string()
                .null()
                .string_len(64),
        )
        .col(
            ColumnDef::new(BudgetPreference::UpdatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(BudgetPreference::Table).to_owned()
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
