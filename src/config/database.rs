//! Database configuration module.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. The
//! `teams` table is generated from the entity definition with
//! `Schema::create_table_from_entity`, so the schema always matches the model.

use crate::config::settings::Settings;
use crate::entities::Team;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::Path;
use tracing::debug;

/// Database used when neither `DATABASE_URL` nor the config file names one.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/fakebb.sqlite?mode=rwc";

/// Resolves the database URL: `DATABASE_URL`, then the config file, then the default.
#[must_use]
pub fn get_database_url(settings: &Settings) -> String {
    std::env::var("DATABASE_URL")
        .ok()
        .or_else(|| settings.database_url.clone())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

/// Creates the parent directory of a file-backed `SQLite` URL if it is missing.
pub fn ensure_sqlite_dir(database_url: &str) -> Result<()> {
    let Some(path) = database_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let path = path.split('?').next().unwrap_or_default();
    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!("Ensuring database directory {:?} exists", parent);
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Establishes a connection to the database at `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    ensure_sqlite_dir(database_url)?;
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the `teams` table if it does not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut team_table = schema.create_table_from_entity(Team);
    team_table.if_not_exists();

    db.execute(builder.build(&team_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::team::Model as TeamModel;
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        let _: Vec<TeamModel> = Team::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }

    #[test]
    fn test_database_url_falls_back_to_settings() {
        if std::env::var("DATABASE_URL").is_ok() {
            return;
        }
        let settings = Settings {
            database_url: Some("sqlite::memory:".to_string()),
            ..Settings::default()
        };
        assert_eq!(get_database_url(&settings), "sqlite::memory:");
        assert_eq!(get_database_url(&Settings::default()), DEFAULT_DATABASE_URL);
    }

    #[test]
    fn test_ensure_sqlite_dir_ignores_memory_urls() -> Result<()> {
        ensure_sqlite_dir("sqlite::memory:")?;
        Ok(())
    }
}
