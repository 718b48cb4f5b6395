use sea_orm_migration::prelude::*;

use crate::m20250518_000001_create_server::Server;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Server: index on city for the grouped dashboard queries
        manager
            .create_index(
                Index::create()
                    .name("idx_server_city")
                    .table(Server::Table)
                    .col(Server::City)
                    .to_owned(),
            )
            .await?;

        // Server: index on name for search and suggestions
        manager
            .create_index(
                Index::create()
                    .name("idx_server_name")
                    .table(Server::Table)
                    .col(Server::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_server_city").table(Server::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_server_name").table(Server::Table).to_owned())
            .await
    }
}
