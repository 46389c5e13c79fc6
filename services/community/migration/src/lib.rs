use sea_orm_migration::prelude::*;

mod m20261001_000001_create_schools;
mod m20261001_000002_create_school_departments;
mod m20261001_000003_create_users;
mod m20261001_000004_create_maps;
mod m20261001_000005_create_map_comments;
mod m20261001_000006_create_keywords;
mod m20261001_000007_create_keyword_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_schools::Migration),
            Box::new(m20261001_000002_create_school_departments::Migration),
            Box::new(m20261001_000003_create_users::Migration),
            Box::new(m20261001_000004_create_maps::Migration),
            Box::new(m20261001_000005_create_map_comments::Migration),
            Box::new(m20261001_000006_create_keywords::Migration),
            Box::new(m20261001_000007_create_keyword_users::Migration),
        ]
    }
}
