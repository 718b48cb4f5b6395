//! Seed the initial fleet.
//!
//! Fifteen servers across the five display cities, matching the fleet the
//! dashboard was originally provisioned with.
use sea_orm_migration::prelude::*;

use crate::m20250518_000001_create_server::Server;

#[derive(DeriveMigrationName)]
pub struct Migration;

const SEED: &[(&str, &str, bool)] = &[
    ("Server1", "Toronto", true),
    ("Server2", "Toronto", false),
    ("Server3", "Toronto", true),
    ("Server4", "Toronto", false),
    ("Server5", "Montreal", true),
    ("Server6", "Montreal", false),
    ("Server7", "Montreal", true),
    ("Server8", "Ottawa", true),
    ("Server9", "Ottawa", false),
    ("Server10", "Calgary", true),
    ("Server11", "Calgary", false),
    ("Server12", "Halifax", true),
    ("Server13", "Halifax", false),
    ("Server14", "Halifax", true),
    ("Server15", "Halifax", false),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(Server::Table)
            .columns([Server::Name, Server::City, Server::IsOnline])
            .to_owned();
        for (name, city, is_online) in SEED {
            insert.values_panic([(*name).into(), (*city).into(), (*is_online).into()]);
        }
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names: Vec<&str> = SEED.iter().map(|(name, _, _)| *name).collect();
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Server::Table)
                    .cond_where(Expr::col(Server::Name).is_in(names))
                    .to_owned(),
            )
            .await
    }
}
