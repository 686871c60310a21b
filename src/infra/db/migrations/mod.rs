//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_profiles_table;
mod m20240102_000001_create_catalog_tables;
mod m20240103_000001_create_enrollment_progress_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_profiles_table::Migration),
            Box::new(m20240102_000001_create_catalog_tables::Migration),
            Box::new(m20240103_000001_create_enrollment_progress_tables::Migration),
        ]
    }
}
