use axum::extract::{Path, Query, State};

use crate::error::AppResult;
use crate::handlers::{today, PeriodParams};
use crate::load_state::LoadState;
use crate::models::{AgencySpending, AwardSummary, SubAgencySpending};
use crate::services::agency;
use crate::state::AppState;

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<PeriodParams>,
) -> AppResult<LoadState<Vec<AgencySpending>>> {
    let period = params.resolve(today())?;
    Ok(agency::agencies(&state.client, period).await.into())
}

pub async fn sub_agencies(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<PeriodParams>,
) -> AppResult<LoadState<Vec<SubAgencySpending>>> {
    let period = params.resolve(today())?;
    Ok(agency::sub_agencies(&state.client, &name, period)
        .await
        .into())
}

pub async fn sub_agency_awards(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<PeriodParams>,
) -> AppResult<LoadState<Vec<AwardSummary>>> {
    let period = params.resolve(today())?;
    Ok(agency::sub_agency_awards(&state.client, &name, period)
        .await
        .into())
}
