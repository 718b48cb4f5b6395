//! Migrator registering fleet migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250518_000001_create_server;
mod m20250518_000002_seed_servers;
mod m20250518_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250518_000001_create_server::Migration),
            Box::new(m20250518_000002_seed_servers::Migration),
            // Indexes should always be applied last
            Box::new(m20250518_000003_add_indexes::Migration),
        ]
    }
}
