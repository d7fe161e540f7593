//! Request handlers for the page and the JSON API.

use crate::{
    core::{
        goal::resolve_selection,
        recommendation::{MixRecommendation, fetch_recommendations},
    },
    errors::Result,
    web::{AppState, render},
};
use axum::{
    Json,
    extract::{Query, State},
    response::Html,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Query string of the page: `?goal=<code>&mix=<slug>&limit=<n>`
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Goal to preselect; unknown codes fall back to the default goal
    pub goal: Option<String>,
    /// Share slug of a mix. Only echoed back into the page's share link.
    pub mix: Option<String>,
    /// Number of recommendations to show
    pub limit: Option<u64>,
}

/// Query string of `/api/recommendations`
#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    /// Goal code to filter on
    pub goal: String,
    /// Number of recommendations to return
    pub limit: Option<u64>,
}

/// Public view of a goal
#[derive(Debug, Serialize)]
pub struct GoalSummary {
    /// Stable goal code
    pub code: String,
    /// Display name
    pub name: String,
}

/// `GET /` - the recommendation page.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let goals = state.goals.get_or_load(&state.database).await?;
    let selected = resolve_selection(&goals, query.goal.as_deref());
    if let Some(mix) = &query.mix {
        debug!("Shared link carries mix {:?}; not used for filtering", mix);
    }

    let limit = query.limit.unwrap_or(state.config.default_limit);
    let recommendations = match selected {
        Some(goal) => fetch_recommendations(&state.database, &goal.code, limit).await?,
        None => Vec::new(),
    };

    let page = render::PageView {
        goals: &goals,
        selected,
        recommendations: &recommendations,
        base_url: &state.config.public_base_url,
        shared_mix: query.mix.as_deref(),
    };
    Ok(Html(render::render_page(&page)))
}

/// `GET /api/goals` - every goal, sorted by name.
pub async fn goals(State(state): State<AppState>) -> Result<Json<Vec<GoalSummary>>> {
    let goals = state.goals.get_or_load(&state.database).await?;
    Ok(Json(
        goals
            .iter()
            .map(|g| GoalSummary {
                code: g.code.clone(),
                name: g.name.clone(),
            })
            .collect(),
    ))
}

/// `GET /api/recommendations?goal=<code>&limit=<n>` - unknown goals give `[]`.
pub async fn recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Json<Vec<MixRecommendation>>> {
    let limit = query.limit.unwrap_or(state.config.default_limit);
    let recommendations = fetch_recommendations(&state.database, &query.goal, limit).await?;
    Ok(Json(recommendations))
}
