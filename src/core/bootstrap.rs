//! One-time population of an empty store.
//!
//! `ensure_seeded` runs once at startup, before the server accepts requests.
//! If the store already holds goals it does nothing (the seed file is not
//! even read). Otherwise the seed is loaded, validated, and inserted inside a
//! single transaction. The application never writes after this point.

use crate::{
    config::seed::{SeedData, load_seed},
    entities::{HealthGoal, health_goal, ingredient, mix, mix_goal, mix_ingredient, warning},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, Set, TransactionTrait, prelude::*};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{info, instrument};

/// Seeds the store from `seed_path` when it holds no goals yet.
///
/// Returns `true` when the seed was inserted, `false` when the store was
/// already populated.
///
/// # Errors
/// [`Error::MissingDataset`] / [`Error::MalformedDataset`] when the store is
/// empty and the seed cannot be used, [`Error::Database`] on storage failures.
#[instrument(skip(db))]
pub async fn ensure_seeded(db: &DatabaseConnection, seed_path: &Path) -> Result<bool> {
    let existing = HealthGoal::find().count(db).await?;
    if existing > 0 {
        info!("Store already holds {} goals, skipping seed.", existing);
        return Ok(false);
    }

    info!("Store is empty, seeding from {:?}", seed_path);
    let seed = load_seed(seed_path)?;
    insert_seed(db, &seed).await?;
    Ok(true)
}

/// Inserts a validated seed in one transaction. Ingredients are shared by
/// name across mixes; a name repeated within one mix is linked once.
pub async fn insert_seed(db: &DatabaseConnection, seed: &SeedData) -> Result<()> {
    seed.validate()?;
    let txn = db.begin().await?;

    let mut goal_ids: HashMap<&str, i64> = HashMap::new();
    for goal in &seed.goals {
        let model = health_goal::ActiveModel {
            code: Set(goal.code.clone()),
            name: Set(goal.name.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        goal_ids.insert(goal.code.as_str(), model.id);
    }

    let mut ingredient_ids: HashMap<String, i64> = HashMap::new();
    for seed_mix in &seed.mixes {
        let mix_model = mix::ActiveModel {
            name: Set(seed_mix.name.clone()),
            prep_type: Set(seed_mix.prep_type.clone()),
            description: Set(seed_mix.description.clone()),
            share_slug: Set(seed_mix.share_slug.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for link in &seed_mix.goals {
            let goal_id = goal_ids
                .get(link.code.as_str())
                .copied()
                .ok_or_else(|| Error::malformed(format!("unknown goal {:?}", link.code)))?;
            mix_goal::ActiveModel {
                mix_id: Set(mix_model.id),
                goal_id: Set(goal_id),
                relevance: Set(link.relevance),
            }
            .insert(&txn)
            .await?;
        }

        let mut linked = HashSet::new();
        for name in &seed_mix.ingredients {
            let name = name.trim();
            if name.is_empty() || !linked.insert(name) {
                continue;
            }
            let ingredient_id = if let Some(id) = ingredient_ids.get(name) {
                *id
            } else {
                let model = ingredient::ActiveModel {
                    name: Set(name.to_string()),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
                ingredient_ids.insert(name.to_string(), model.id);
                model.id
            };
            mix_ingredient::ActiveModel {
                mix_id: Set(mix_model.id),
                ingredient_id: Set(ingredient_id),
            }
            .insert(&txn)
            .await?;
        }

        for seed_warning in &seed_mix.warnings {
            warning::ActiveModel {
                mix_id: Set(mix_model.id),
                level: Set(seed_warning.level.clone()),
                message: Set(seed_warning.message.clone()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }
    }

    txn.commit().await?;
    info!(
        "Seeded {} goals, {} mixes, {} ingredients.",
        seed.goals.len(),
        seed.mixes.len(),
        ingredient_ids.len()
    );
    Ok(())
}
