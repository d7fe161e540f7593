//! Recommendation fetching - the ranked list of mixes for one goal.
//!
//! Mixes are reached through `mix_goal` (inner join, so only mixes linked to
//! the goal are returned), ranked by relevance, truncated to the limit, and
//! enriched with their ingredient names and severity-ordered warnings.
//! Everything here is read-only.

use crate::{
    core::warning::{MixWarning, sort_by_severity},
    entities::{Ingredient, Mix, Warning, health_goal, ingredient, mix, mix_goal, mix_ingredient, warning},
    errors::{Error, Result},
};
use sea_orm::{FromQueryResult, JoinType, QueryOrder, QuerySelect, RelationTrait, prelude::*};
use serde::Serialize;
use tracing::debug;

/// Number of recommendations returned when the caller does not specify one.
pub const DEFAULT_LIMIT: u64 = 3;

/// Upper bound on the number of recommendations per request; larger limits are clamped.
pub const MAX_LIMIT: u64 = 20;

/// One recommended mix with everything the page displays about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MixRecommendation {
    /// Display name
    pub name: String,
    /// Preparation category
    pub prep_type: String,
    /// Description / preparation steps
    pub description: String,
    /// Public handle for shareable links
    pub share_slug: String,
    /// Relevance of the mix for the requested goal
    pub relevance: i32,
    /// Ingredient names, alphabetical
    pub ingredients: Vec<String>,
    /// Warnings, most severe first
    pub warnings: Vec<MixWarning>,
}

#[derive(Debug, FromQueryResult)]
struct RankedMix {
    id: i64,
    name: String,
    prep_type: String,
    description: String,
    share_slug: String,
    relevance: i32,
}

/// Returns the top `limit` mixes for `goal_code`.
///
/// Ordering is relevance descending, then mix name ascending, then mix id, so
/// repeated calls against an unchanged store return identical output. An
/// unknown goal code yields an empty list.
///
/// # Errors
/// - [`Error::InvalidLimit`] if `limit` is zero
/// - [`Error::Database`] on any storage failure
pub async fn fetch_recommendations(
    db: &DatabaseConnection,
    goal_code: &str,
    limit: u64,
) -> Result<Vec<MixRecommendation>> {
    if limit == 0 {
        return Err(Error::InvalidLimit { limit });
    }
    let limit = limit.min(MAX_LIMIT);

    let ranked = Mix::find()
        .select_only()
        .column_as(mix::Column::Id, "id")
        .column_as(mix::Column::Name, "name")
        .column_as(mix::Column::PrepType, "prep_type")
        .column_as(mix::Column::Description, "description")
        .column_as(mix::Column::ShareSlug, "share_slug")
        .column_as(mix_goal::Column::Relevance, "relevance")
        .join(JoinType::InnerJoin, mix::Relation::MixGoals.def())
        .join(JoinType::InnerJoin, mix_goal::Relation::HealthGoal.def())
        .filter(health_goal::Column::Code.eq(goal_code))
        .order_by_desc(mix_goal::Column::Relevance)
        .order_by_asc(mix::Column::Name)
        .order_by_asc(mix::Column::Id)
        .limit(limit)
        .into_model::<RankedMix>()
        .all(db)
        .await?;

    debug!(
        "Goal {:?}: {} mixes selected (limit {})",
        goal_code,
        ranked.len(),
        limit
    );

    let mut recommendations = Vec::with_capacity(ranked.len());
    for row in ranked {
        let ingredients = get_ingredient_names(db, row.id).await?;
        let warnings = get_ordered_warnings(db, row.id).await?;
        recommendations.push(MixRecommendation {
            name: row.name,
            prep_type: row.prep_type,
            description: row.description,
            share_slug: row.share_slug,
            relevance: row.relevance,
            ingredients,
            warnings,
        });
    }
    Ok(recommendations)
}

/// Ingredient names of a mix, alphabetical.
pub async fn get_ingredient_names(db: &DatabaseConnection, mix_id: i64) -> Result<Vec<String>> {
    let ingredients = Ingredient::find()
        .join(JoinType::InnerJoin, ingredient::Relation::MixIngredients.def())
        .filter(mix_ingredient::Column::MixId.eq(mix_id))
        .order_by_asc(ingredient::Column::Name)
        .all(db)
        .await?;
    Ok(ingredients.into_iter().map(|i| i.name).collect())
}

/// Warnings of a mix, most severe first, insertion order within a tier.
pub async fn get_ordered_warnings(db: &DatabaseConnection, mix_id: i64) -> Result<Vec<MixWarning>> {
    let mut warnings: Vec<MixWarning> = Warning::find()
        .filter(warning::Column::MixId.eq(mix_id))
        .order_by_asc(warning::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(MixWarning::from)
        .collect();
    sort_by_severity(&mut warnings);
    Ok(warnings)
}
