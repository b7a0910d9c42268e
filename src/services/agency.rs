use crate::client::{ApiResult, AwardFilter, SpendingClient};
use crate::fiscal::FiscalPeriod;
use crate::models::{AgencySpending, AwardSummary, SubAgencySpending};

/// Rows requested for the agency list screen.
pub const AGENCY_LIST_LIMIT: u32 = 50;

pub async fn agencies(client: &SpendingClient, period: FiscalPeriod) -> ApiResult<Vec<AgencySpending>> {
    client.top_agencies(period, AGENCY_LIST_LIMIT).await
}

/// Sub-agencies of a top-tier agency that spent money in the period.
pub async fn sub_agencies(
    client: &SpendingClient,
    agency_name: &str,
    period: FiscalPeriod,
) -> ApiResult<Vec<SubAgencySpending>> {
    let rows = client.sub_agencies(agency_name, period).await?;
    Ok(positive_only(rows))
}

pub async fn sub_agency_awards(
    client: &SpendingClient,
    sub_agency_name: &str,
    period: FiscalPeriod,
) -> ApiResult<Vec<AwardSummary>> {
    client
        .awards(&AwardFilter::SubAgency(sub_agency_name.to_string()), period)
        .await
}

fn positive_only(rows: Vec<SubAgencySpending>) -> Vec<SubAgencySpending> {
    rows.into_iter().filter(|s| s.amount > 0.0).collect()
}
