//! Process-wide memoized goal list.
//!
//! Goals are read-only reference data, so the list is loaded on first use and
//! shared for the lifetime of the process. There is no invalidation short of a
//! restart. A failed load is not remembered; the next caller tries again.

use crate::core::goal::list_goals;
use crate::entities::health_goal;
use crate::errors::Result;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, trace};

/// Lazily-initialized, guarded goal list
#[derive(Debug, Default)]
pub struct GoalCache {
    goals: OnceCell<Arc<Vec<health_goal::Model>>>,
}

impl GoalCache {
    /// Creates an empty cache; nothing is loaded until the first call.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the goal list, loading it on the first call. Concurrent first
    /// callers wait for a single load.
    pub async fn get_or_load(&self, db: &DatabaseConnection) -> Result<Arc<Vec<health_goal::Model>>> {
        let goals = self
            .goals
            .get_or_try_init(|| async {
                info!("Loading goal list into cache...");
                let goals = list_goals(db).await?;
                info!("Goal cache loaded with {} goals.", goals.len());
                trace!("Goal cache now contains: {:?}", goals);
                Ok::<_, crate::errors::Error>(Arc::new(goals))
            })
            .await?;
        Ok(Arc::clone(goals))
    }

    /// Whether the list has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.goals.initialized()
    }
}
