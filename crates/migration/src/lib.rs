//! Migrator registering one migration per site table.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_site_settings;
mod m20240101_000002_create_hero_section;
mod m20240101_000003_create_service;
mod m20240101_000004_create_training;
mod m20240101_000005_create_trusted_company;
mod m20240101_000006_create_testimonial;
mod m20240101_000007_create_contact;
mod m20240101_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_site_settings::Migration),
            Box::new(m20240101_000002_create_hero_section::Migration),
            Box::new(m20240101_000003_create_service::Migration),
            Box::new(m20240101_000004_create_training::Migration),
            Box::new(m20240101_000005_create_trusted_company::Migration),
            Box::new(m20240101_000006_create_testimonial::Migration),
            Box::new(m20240101_000007_create_contact::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000010_add_indexes::Migration),
        ]
    }
}
