//! Create `server` table.
//!
//! One row per tracked server; identity is assigned by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Server::Table)
                    .if_not_exists()
                    .col(pk_auto(Server::Id))
                    .col(string_len(Server::Name, 128).not_null())
                    .col(string_len(Server::City, 128).not_null())
                    .col(boolean(Server::IsOnline).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Server::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Server { Table, Id, Name, City, IsOnline }
