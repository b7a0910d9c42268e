use axum::extract::{Path, Query, State};

use crate::error::AppResult;
use crate::handlers::{today, PeriodParams};
use crate::load_state::LoadState;
use crate::services::awards::{self, AwardDetail};
use crate::state::AppState;

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<PeriodParams>,
) -> AppResult<LoadState<AwardDetail>> {
    let period = params.resolve(today())?;
    Ok(awards::detail(&state.client, &id, period).await.into())
}
