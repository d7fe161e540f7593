//! Database configuration module.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust
//! structs. Creation is `IF NOT EXISTS`, which lets a persistent database file
//! be reopened on every start.

use crate::entities::{HealthGoal, Ingredient, Mix, MixGoal, MixIngredient, Warning};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info};

/// Default location of the `SQLite` store when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://wellness_mixes.sqlite?mode=rwc";

/// Establishes a connection to the `SQLite` database at `database_url`.
///
/// Connection failures are returned as-is; an unreachable store is fatal at startup.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database at {}", database_url);
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all tables that do not exist yet, parents before children so the
/// foreign keys resolve.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let tables = [
        schema.create_table_from_entity(HealthGoal),
        schema.create_table_from_entity(Ingredient),
        schema.create_table_from_entity(Mix),
        schema.create_table_from_entity(MixGoal),
        schema.create_table_from_entity(MixIngredient),
        schema.create_table_from_entity(Warning),
    ];

    for mut table in tables {
        table.if_not_exists();
        db.execute(builder.build(&table)).await?;
    }

    info!("Database tables ensured.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{HealthGoalModel, MixGoalModel, MixModel, WarningModel};
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<HealthGoalModel> = HealthGoal::find().limit(1).all(&db).await?;
        let _: Vec<MixModel> = Mix::find().limit(1).all(&db).await?;
        let _: Vec<MixGoalModel> = MixGoal::find().limit(1).all(&db).await?;
        let _: Vec<WarningModel> = Warning::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_repeatable() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }
}
