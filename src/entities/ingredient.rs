//! Ingredient entity - shared across mixes through `mix_ingredient`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ingredient database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    /// Unique identifier for the ingredient
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Ingredient name (e.g., "Camomille")
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One ingredient appears in many mixes
    #[sea_orm(has_many = "super::mix_ingredient::Entity")]
    MixIngredients,
}

impl Related<super::mix_ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MixIngredients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
