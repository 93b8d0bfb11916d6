pub use sea_orm_migration::prelude::*;

mod m20250601_000001_users;
mod m20250601_000002_sample_types;
mod m20250601_000003_storage_nodes;
mod m20250601_000004_storage_positions;
mod m20250601_000005_samples;
mod m20250601_000006_sample_locations;
mod m20250601_000007_events;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_users::Migration),
            Box::new(m20250601_000002_sample_types::Migration),
            Box::new(m20250601_000003_storage_nodes::Migration),
            Box::new(m20250601_000004_storage_positions::Migration),
            Box::new(m20250601_000005_samples::Migration),
            Box::new(m20250601_000006_sample_locations::Migration),
            Box::new(m20250601_000007_events::Migration),
        ]
    }
}
