//! Health goal entity - the fixed list of objectives a visitor can pick from.
//!
//! Goals are reference data: seeded once, never mutated by the application.
//! The `code` is the stable identifier carried in shared links.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Health goal database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "health_goals")]
pub struct Model {
    /// Unique identifier for the goal
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Stable external code (e.g., `"sommeil"`), used as the filter key
    #[sea_orm(unique)]
    pub code: String,
    /// Display label (e.g., "Sleep Well")
    pub name: String,
}

/// Defines relationships between `HealthGoal` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One goal is linked to many mixes through `mix_goal`
    #[sea_orm(has_many = "super::mix_goal::Entity")]
    MixGoals,
}

impl Related<super::mix_goal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MixGoals.def()
    }
}

impl Related<super::mix::Entity> for Entity {
    fn to() -> RelationDef {
        super::mix_goal::Relation::Mix.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::mix_goal::Relation::HealthGoal.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
