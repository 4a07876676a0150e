use sea_query::{ColumnDef, Index, Table, TableCreateStatement, TableDropStatement};

use crate::table::IngredientPrice;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(IngredientPrice::Table)
        .col(ColumnDef::new(IngredientPrice::Name).string().not_null())
        .col(
            ColumnDef::new(IngredientPrice::Unit)
                .string()
                .not_null()
                .string_len(20),
        )
        .col(
            ColumnDef::new(IngredientPrice::UnitCostCents)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(IngredientPrice::UpdatedAt)
                .big_integer()
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(IngredientPrice::Name)
                .col(IngredientPrice::Unit),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(IngredientPrice::Table).to_owned()
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
