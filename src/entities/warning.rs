//! Warning entity - a precaution attached to exactly one mix.
//!
//! `level` is stored as free text (`"alerte"`, `"prudence"`, anything else is
//! informational); `crate::core::warning::WarningLevel` gives it an ordering.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Warning database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "warnings")]
pub struct Model {
    /// Unique identifier, also the insertion order within a severity tier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the mix this warning belongs to
    pub mix_id: i64,
    /// Severity level as stored
    pub level: String,
    /// Message shown to the visitor
    pub message: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each warning belongs to one mix
    #[sea_orm(
        belongs_to = "super::mix::Entity",
        from = "Column::MixId",
        to = "super::mix::Column::Id"
    )]
    Mix,
}

impl Related<super::mix::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mix.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
