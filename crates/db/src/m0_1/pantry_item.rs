use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::PantryItem;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(PantryItem::Table)
        .col(
            ColumnDef::new(PantryItem::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(PantryItem::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(PantryItem::Name).string().not_null())
        .col(
            ColumnDef::new(PantryItem::Category)
                .string()
                .not_null()
                .string_len(25),
        )
        .col(
            ColumnDef::new(PantryItem::Quantity)
                .string()
                .not_null()
                .string_len(40),
        )
        .col(
            ColumnDef::new(PantryItem::Unit)
                .string()
                .not_null()
                .string_len(20),
        )
        .col(
            ColumnDef::new(PantryItem::ExpiresOn)
                .string()
                .null()
                .string_len(10),
        )
        .col(ColumnDef::new(PantryItem::Location).string().null())
        .col(ColumnDef::new(PantryItem::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(PantryItem::Table).to_owned()
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

pub struct CreateUserIdx;

fn create_user_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_pantry_item_user_id")
        .table(PantryItem::Table)
        .col(PantryItem::UserId)
        .to_owned()
}

fn drop_user_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_pantry_item_user_id")
        .table(PantryItem::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateUserIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_user_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_user_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
