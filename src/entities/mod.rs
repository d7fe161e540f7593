//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the relational schema: goals, mixes, ingredients,
//! the two association tables, and warnings.

pub mod health_goal;
pub mod ingredient;
pub mod mix;
pub mod mix_goal;
pub mod mix_ingredient;
pub mod warning;

// Re-export specific types to avoid conflicts
pub use health_goal::{
    Column as HealthGoalColumn, Entity as HealthGoal, Model as HealthGoalModel,
};
pub use ingredient::{Column as IngredientColumn, Entity as Ingredient, Model as IngredientModel};
pub use mix::{Column as MixColumn, Entity as Mix, Model as MixModel};
pub use mix_goal::{Column as MixGoalColumn, Entity as MixGoal, Model as MixGoalModel};
pub use mix_ingredient::{
    Column as MixIngredientColumn, Entity as MixIngredient, Model as MixIngredientModel,
};
pub use warning::{Column as WarningColumn, Entity as Warning, Model as WarningModel};
