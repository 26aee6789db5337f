use color_eyre::{Result, eyre::Context};
use migration::MigratorTrait;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseBackend, DatabaseConnection,
};
use std::path::Path;
use std::time::Duration;

pub struct Database {
    pub(crate) conn: DatabaseConnection,
}

impl Database {
    /// Open or create a SQLite database at the given path
    pub async fn open(path: &Path) -> Result<Self> {
        log::debug!("Opening database at: {}", path.display());

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).wrap_err_with(|| {
                format!("Failed to create database directory: {}", parent.display())
            })?;
        }

        Self::connect(&format!("sqlite://{}?mode=rwc", path.display())).await
    }

    /// Connect to the database behind `url` and bring its schema up to date
    pub async fn connect(url: &str) -> Result<Self> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(16)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(8))
            .acquire_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(60))
            .sqlx_logging(false);

        let conn = SeaDatabase::connect(opt)
            .await
            .wrap_err("Failed to connect to database")?;

        let database = Self::from_connection(conn).await?;
        log::info!("Database ready");
        Ok(database)
    }

    /// Wraps an existing connection, enabling foreign keys and running migrations
    pub(crate) async fn from_connection(conn: DatabaseConnection) -> Result<Self> {
        if conn.get_database_backend() == DatabaseBackend::Sqlite {
            conn.execute_unprepared("PRAGMA foreign_keys = ON")
                .await
                .wrap_err("Failed to enable foreign keys")?;
        }

        log::debug!("Running database migrations");
        migration::Migrator::up(&conn, None)
            .await
            .wrap_err("Failed to run database migrations")?;

        Ok(Self { conn })
    }
}
