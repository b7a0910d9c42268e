use crate::client::{ApiResult, RecipientFilter, SpendingClient};
use crate::fiscal::FiscalPeriod;
use crate::models::RecipientList;

/// Recipients for a drill-down, with the multiple-recipients row split out.
pub async fn load(
    client: &SpendingClient,
    filter: &RecipientFilter,
    period: FiscalPeriod,
) -> ApiResult<RecipientList> {
    let rows = client.recipients(filter, period).await?;
    let list = RecipientList::split(rows);
    tracing::debug!(
        ?filter,
        recipients = list.recipients.len(),
        "Recipient list loaded"
    );
    Ok(list)
}
