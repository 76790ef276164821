use crate::config::ServerConfig;
use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;
use trivia_migration::{Migrator, MigratorTrait};

pub async fn init_pool_and_migrate(config: &ServerConfig) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .with_context(|| format!("failed to connect to {}", config.redacted_database_url()))?;

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .context("failed to apply database migrations")?;
        info!("database migrations applied");
    }

    Ok(db)
}

/// Fresh, migrated in-memory SQLite database. A single pooled connection keeps every query on
/// the same in-memory file.
#[cfg(test)]
pub(crate) async fn connect_in_memory() -> DatabaseConnection {
    let config = ServerConfig {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        ..ServerConfig::default()
    };

    init_pool_and_migrate(&config)
        .await
        .expect("in-memory database should migrate")
}
