use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::{today, PeriodParams};
use crate::load_state::LoadState;
use crate::services::search::{self, SearchResults, Suggestion, SUGGESTIONS};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

pub async fn awards(
    State(state): State<AppState>,
    Query(period): Query<PeriodParams>,
    Query(params): Query<SearchParams>,
) -> AppResult<LoadState<SearchResults>> {
    let period = period.resolve(today())?;
    Ok(search::awards(&state.client, &params.q, period)
        .await
        .into())
}

pub async fn suggestions() -> Json<&'static [Suggestion]> {
    Json(SUGGESTIONS)
}
