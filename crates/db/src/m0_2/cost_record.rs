use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::CostRecord;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(CostRecord::Table)
        .col(
            ColumnDef::new(CostRecord::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(CostRecord::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(CostRecord::AmountCents)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(CostRecord::OccurredAt)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(CostRecord::Source)
                .string()
                .not_null()
                .string_len(20),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(CostRecord::Table).to_owned()
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

pub struct CreateUserOccurredIdx;

fn create_user_occurred_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_cost_record_user_occurred")
        .table(CostRecord::Table)
        .col(CostRecord::UserId)
        .col(CostRecord::OccurredAt)
        .to_owned()
}

fn drop_user_occurred_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_cost_record_user_occurred")
        .table(CostRecord::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateUserOccurredIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_user_occurred_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_user_occurred_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
