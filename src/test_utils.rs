//! Shared test utilities.
//!
//! Helpers for setting up an in-memory database and seeding teams with
//! sensible defaults.

use crate::{
    core::team::{self, TeamUpdate},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a team and sets its display name.
pub async fn create_named_team(
    db: &DatabaseConnection,
    id: &str,
    name: &str,
) -> Result<entities::team::Model> {
    team::create_team(db, id).await?;
    team::update_team(db, id, TeamUpdate::Name(name.to_string())).await
}

/// Creates `count` teams named `team00`, `team01`, ... with matching names.
pub async fn create_numbered_teams(db: &DatabaseConnection, count: usize) -> Result<()> {
    for i in 0..count {
        let id = format!("team{i:02}");
        create_named_team(db, &id, &format!("Team Number {i}")).await?;
    }
    Ok(())
}
