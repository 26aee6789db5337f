pub use sea_orm_migration::prelude::*;

mod m20210328_000001_create_venues_and_artists;
mod m20210328_000002_create_shows;
mod m20210402_000001_add_artist_website;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20210328_000001_create_venues_and_artists::Migration),
            Box::new(m20210328_000002_create_shows::Migration),
            Box::new(m20210402_000001_add_artist_website::Migration),
        ]
    }
}
