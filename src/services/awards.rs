//! Award lists and the award detail screen.

use serde::Serialize;

use crate::client::{ApiResult, AwardFilter, SpendingClient};
use crate::fiscal::FiscalPeriod;
use crate::models::award::obligated_in_range;
use crate::models::{AwardDetails, AwardSummary, Subaward};

pub async fn list(
    client: &SpendingClient,
    filter: &AwardFilter,
    period: FiscalPeriod,
) -> ApiResult<Vec<AwardSummary>> {
    client.awards(filter, period).await
}

#[derive(Debug, Clone, Serialize)]
pub struct AwardDetail {
    pub award_id: String,
    pub details: AwardDetails,
    pub subawards: Vec<Subaward>,
    /// Sum of subaward obligations dated inside the selected period, if any.
    pub obligated_in_period_cents: Option<i64>,
}

/// Details and subawards are fetched concurrently; either failing fails both.
pub async fn detail(
    client: &SpendingClient,
    award_id: &str,
    period: FiscalPeriod,
) -> ApiResult<AwardDetail> {
    let (details, subawards) =
        tokio::try_join!(client.award_details(award_id), client.subawards(award_id))?;

    let obligated_in_period_cents = obligated_in_range(&subawards, &period.date_range());

    Ok(AwardDetail {
        award_id: award_id.to_string(),
        details,
        subawards,
        obligated_in_period_cents,
    })
}
