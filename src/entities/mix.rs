//! Mix entity - a named preparation (infusion, smoothie, ...) recommended for
//! one or more health goals.
//!
//! Each mix owns its ingredient associations and its warnings. The
//! `share_slug` is the public handle used in shareable links and must never
//! change once published.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Mix database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mixes")]
pub struct Model {
    /// Unique identifier for the mix
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Tisane du soir")
    pub name: String,
    /// Preparation category (e.g., "infusion", "smoothie")
    pub prep_type: String,
    /// Free-text description / preparation steps
    pub description: String,
    /// Unique, URL-safe identifier used in shareable links
    #[sea_orm(unique)]
    pub share_slug: String,
}

/// Defines relationships between Mix and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One mix is linked to many goals through `mix_goal`
    #[sea_orm(has_many = "super::mix_goal::Entity")]
    MixGoals,
    /// One mix is linked to many ingredients through `mix_ingredient`
    #[sea_orm(has_many = "super::mix_ingredient::Entity")]
    MixIngredients,
    /// One mix has many warnings
    #[sea_orm(has_many = "super::warning::Entity")]
    Warnings,
}

impl Related<super::mix_goal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MixGoals.def()
    }
}

impl Related<super::mix_ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MixIngredients.def()
    }
}

impl Related<super::warning::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Warnings.def()
    }
}

impl Related<super::health_goal::Entity> for Entity {
    fn to() -> RelationDef {
        super::mix_goal::Relation::HealthGoal.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::mix_goal::Relation::Mix.def().rev())
    }
}

impl Related<super::ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        super::mix_ingredient::Relation::Ingredient.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::mix_ingredient::Relation::Mix.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
