pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_trivia_schema;
mod m20261018_000002_seed_categories;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_trivia_schema::Migration),
            Box::new(m20261018_000002_seed_categories::Migration),
        ]
    }
}
