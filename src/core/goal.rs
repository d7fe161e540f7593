//! Goal lookups - listing and selecting health goals.

use crate::{
    entities::{HealthGoal, health_goal},
    errors::Result,
};
use sea_orm::{QueryOrder, prelude::*};

/// Retrieves every goal, ordered alphabetically by display name.
///
/// An empty store yields an empty list; the page shows a "no data" notice
/// rather than failing.
pub async fn list_goals(db: &DatabaseConnection) -> Result<Vec<health_goal::Model>> {
    HealthGoal::find()
        .order_by_asc(health_goal::Column::Name)
        .order_by_asc(health_goal::Column::Code)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a goal by its stable code.
pub async fn get_goal_by_code(
    db: &DatabaseConnection,
    code: &str,
) -> Result<Option<health_goal::Model>> {
    HealthGoal::find()
        .filter(health_goal::Column::Code.eq(code))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Picks the goal to display: the requested one when it exists, otherwise
/// the first goal of the list. Unknown codes from shared links land here.
#[must_use]
pub fn resolve_selection<'a>(
    goals: &'a [health_goal::Model],
    requested: Option<&str>,
) -> Option<&'a health_goal::Model> {
    requested
        .and_then(|code| goals.iter().find(|goal| goal.code == code))
        .or_else(|| goals.first())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_list_goals_sorted_by_name() -> Result<()> {
        let db = setup_test_db().await?;
        insert_goal(&db, "sommeil", "Sleep Well").await?;
        insert_goal(&db, "digestion", "Digestion").await?;
        insert_goal(&db, "energie", "Énergie").await?;
        insert_goal(&db, "immunite", "Immunité").await?;

        let names: Vec<String> = list_goals(&db).await?.into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Digestion", "Immunité", "Sleep Well", "Énergie"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_goals_empty_store() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(list_goals(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_get_goal_by_code() -> Result<()> {
        let db = setup_test_db().await?;
        insert_goal(&db, "sommeil", "Sleep Well").await?;

        let goal = get_goal_by_code(&db, "sommeil").await?.unwrap();
        assert_eq!(goal.name, "Sleep Well");
        assert!(get_goal_by_code(&db, "unknown").await?.is_none());
        Ok(())
    }

    #[test]
    fn test_resolve_selection() {
        let goals = vec![
            health_goal::Model {
                id: 1,
                code: "digestion".into(),
                name: "Digestion".into(),
            },
            health_goal::Model {
                id: 2,
                code: "sommeil".into(),
                name: "Sleep Well".into(),
            },
        ];

        assert_eq!(
            resolve_selection(&goals, Some("sommeil")).unwrap().code,
            "sommeil"
        );
        // Unknown and missing codes fall back to the first goal
        assert_eq!(
            resolve_selection(&goals, Some("nope")).unwrap().code,
            "digestion"
        );
        assert_eq!(resolve_selection(&goals, None).unwrap().code, "digestion");
        assert!(resolve_selection(&[], Some("sommeil")).is_none());
    }
}
