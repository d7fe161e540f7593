//! Shared test utilities.
//!
//! This module provides helpers for setting up in-memory test databases and
//! inserting goals, mixes, and their associations directly.

use crate::{
    config::seed::parse_seed_toml,
    core::bootstrap::insert_seed,
    entities::{health_goal, ingredient, mix, mix_goal, mix_ingredient, warning},
    errors::Result,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tracing_subscriber::EnvFilter;

/// Small but complete relational seed used across tests.
pub const SAMPLE_SEED: &str = r#"
[[goals]]
code = "sommeil"
name = "Sleep Well"

[[goals]]
code = "digestion"
name = "Digestion"

[[goals]]
code = "energie"
name = "Énergie"

[[mixes]]
name = "Tisane du soir"
prep_type = "infusion"
description = "Infuser 10 minutes."
share_slug = "tisane-1"
ingredients = ["Tilleul", "Camomille"]
goals = [{ code = "sommeil", relevance = 5 }]
warnings = [
    { level = "prudence", message = "mild" },
    { level = "alerte", message = "severe" },
]

[[mixes]]
name = "Lait d'or"
prep_type = "boisson chaude"
description = "Chauffer le lait <doucement>."
share_slug = "lait-or"
ingredients = ["Curcuma", "Lait", "Poivre"]
goals = [{ code = "sommeil", relevance = 3 }, { code = "digestion", relevance = 2 }]

[[mixes]]
name = "Infusion digestive"
prep_type = "infusion"
share_slug = "infusion-digestive"
ingredients = ["Fenouil", "Menthe"]
goals = [{ code = "digestion", relevance = 4 }]
"#;

pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Loads [`SAMPLE_SEED`] into `db`.
pub async fn seed_sample(db: &DatabaseConnection) -> Result<()> {
    let seed = parse_seed_toml(SAMPLE_SEED)?;
    insert_seed(db, &seed).await
}

pub async fn insert_goal(
    db: &DatabaseConnection,
    code: &str,
    name: &str,
) -> Result<health_goal::Model> {
    health_goal::ActiveModel {
        code: Set(code.to_string()),
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Inserts a mix with `prep_type` "infusion" and an empty description.
pub async fn insert_mix(db: &DatabaseConnection, name: &str, slug: &str) -> Result<mix::Model> {
    mix::ActiveModel {
        name: Set(name.to_string()),
        prep_type: Set("infusion".to_string()),
        description: Set(String::new()),
        share_slug: Set(slug.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

pub async fn link_goal(
    db: &DatabaseConnection,
    mix_id: i64,
    goal_id: i64,
    relevance: i32,
) -> Result<mix_goal::Model> {
    mix_goal::ActiveModel {
        mix_id: Set(mix_id),
        goal_id: Set(goal_id),
        relevance: Set(relevance),
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates the ingredient and links it to the mix.
pub async fn add_ingredient(
    db: &DatabaseConnection,
    mix_id: i64,
    name: &str,
) -> Result<ingredient::Model> {
    let ingredient = ingredient::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    mix_ingredient::ActiveModel {
        mix_id: Set(mix_id),
        ingredient_id: Set(ingredient.id),
    }
    .insert(db)
    .await?;
    Ok(ingredient)
}

pub async fn add_warning(
    db: &DatabaseConnection,
    mix_id: i64,
    level: &str,
    message: &str,
) -> Result<warning::Model> {
    warning::ActiveModel {
        mix_id: Set(mix_id),
        level: Set(level.to_string()),
        message: Set(message.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}
