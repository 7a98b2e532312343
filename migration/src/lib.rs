pub use sea_orm_migration::prelude::*;

mod m20230601_000001_create_movies;
mod m20230602_000001_add_movies_category_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230601_000001_create_movies::Migration),
            Box::new(m20230602_000001_add_movies_category_index::Migration),
        ]
    }
}
