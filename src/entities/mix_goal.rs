//! Mix/goal association - carries the relevance score used to rank
//! recommendations for a goal. Higher relevance sorts first.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Mix/goal join table model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mix_goal")]
pub struct Model {
    /// ID of the recommended mix
    #[sea_orm(primary_key, auto_increment = false)]
    pub mix_id: i64,
    /// ID of the goal the mix is recommended for
    #[sea_orm(primary_key, auto_increment = false)]
    pub goal_id: i64,
    /// Ranking score of the mix for this goal
    pub relevance: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each association points to one mix
    #[sea_orm(
        belongs_to = "super::mix::Entity",
        from = "Column::MixId",
        to = "super::mix::Column::Id"
    )]
    Mix,
    /// Each association points to one goal
    #[sea_orm(
        belongs_to = "super::health_goal::Entity",
        from = "Column::GoalId",
        to = "super::health_goal::Column::Id"
    )]
    HealthGoal,
}

impl Related<super::mix::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mix.def()
    }
}

impl Related<super::health_goal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HealthGoal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
