use axum::extract::{Query, State};

use crate::error::AppResult;
use crate::handlers::{today, PeriodParams};
use crate::load_state::LoadState;
use crate::services::dashboard::{self, Dashboard};
use crate::state::AppState;

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<PeriodParams>,
) -> AppResult<LoadState<Dashboard>> {
    let period = params.resolve(today())?;
    let settings = state.load_settings()?;

    let result = dashboard::load(
        &state.client,
        &state.psc_names,
        &settings,
        period,
        state.config.fan_out,
    )
    .await;

    Ok(result.into())
}
