use axum::extract::{Path, Query, State};

use crate::error::{AppError, AppResult};
use crate::handlers::{today, PeriodParams};
use crate::load_state::LoadState;
use crate::models::RecipientList;
use crate::services::covid::{self, CovidCategory};
use crate::state::AppState;

pub async fn index(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<PeriodParams>,
) -> AppResult<LoadState<RecipientList>> {
    let category: CovidCategory = category.parse().map_err(AppError::NotFound)?;
    let period = params.resolve(today())?;

    Ok(covid::load(&state.client, category, period).await.into())
}
