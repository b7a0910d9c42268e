use axum::extract::{Path, Query, State};

use crate::error::{AppError, AppResult};
use crate::handlers::{today, PeriodParams};
use crate::load_state::LoadState;
use crate::models::ProgramActivity;
use crate::services::explore::{self, ExploreData, ExploreTab};
use crate::state::AppState;

pub async fn index(
    State(state): State<AppState>,
    Path(tab): Path<String>,
    Query(params): Query<PeriodParams>,
) -> AppResult<LoadState<ExploreData>> {
    let tab: ExploreTab = tab.parse().map_err(AppError::NotFound)?;
    let period = params.resolve(today())?;

    Ok(explore::load(&state.client, &state.psc_names, tab, period)
        .await
        .into())
}

pub async fn program_activities(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<PeriodParams>,
) -> AppResult<LoadState<Vec<ProgramActivity>>> {
    let period = params.resolve(today())?;

    Ok(state
        .client
        .program_activities(&code, period.year)
        .await
        .into())
}
