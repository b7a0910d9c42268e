//! The dashboard: top agencies, spending categories, top recipients and top
//! COVID-19 recipients for one fiscal period, fetched concurrently.

use serde::Serialize;
use tracing::{debug, warn};

use crate::aggregate::{aggregate, CategoryBucket, DroppedSummary};
use crate::client::{ApiError, ApiResult, RecipientFilter, SpendingClient};
use crate::config::FanOutPolicy;
use crate::fiscal::FiscalPeriod;
use crate::filters;
use crate::models::{
    sum_cents, to_cents, AgencySpending, Colored, PscSpending, RecipientList, RecipientSpending,
    Settings,
};
use crate::palette;
use crate::psc::CategoryNameTable;
use crate::services::color_top;

pub const TOP_AGENCIES: usize = 8;
pub const TOP_CATEGORIES: usize = 8;
pub const TOP_RECIPIENTS: usize = 8;
pub const TOP_COVID_RECIPIENTS: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct AgencySection {
    pub total_spending_cents: i64,
    pub total_spending: String,
    pub your_contribution: String,
    pub agencies: Vec<AgencyBar>,
}

/// An agency chart bar, labelled with its short name and its share of the total.
#[derive(Debug, Clone, Serialize)]
pub struct AgencyBar {
    pub label: String,
    pub share: String,
    #[serde(flatten)]
    pub agency: Colored<AgencySpending>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySection {
    pub buckets: Vec<CategoryBucket>,
    pub dropped: DroppedSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipientSection {
    pub recipients: Vec<Colored<RecipientSpending>>,
    pub amount_for_multiple_recipients: f64,
}

/// A dashboard section that could not be loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionFailure {
    pub section: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub period_label: String,
    pub agencies: Option<AgencySection>,
    pub categories: Option<CategorySection>,
    pub recipients: Option<RecipientSection>,
    pub covid_recipients: Option<RecipientSection>,
    pub failed_sections: Vec<SectionFailure>,
}

pub fn agency_section(rows: Vec<AgencySpending>, settings: &Settings) -> AgencySection {
    let kept: Vec<AgencySpending> = rows.into_iter().filter(|a| a.amount > 0.0).collect();
    let total_spending_cents = sum_cents(kept.iter().map(|a| to_cents(a.amount)));

    AgencySection {
        total_spending_cents,
        total_spending: filters::format_compact(total_spending_cents),
        your_contribution: settings.format_contribution(total_spending_cents),
        agencies: color_top(kept, palette::AGENCY, TOP_AGENCIES)
            .into_iter()
            .map(|agency| AgencyBar {
                label: agency.item.short_name().to_string(),
                share: filters::format_share(to_cents(agency.item.amount), total_spending_cents),
                agency,
            })
            .collect(),
    }
}

pub fn category_section(rows: &[PscSpending], names: &CategoryNameTable) -> CategorySection {
    let aggregation = aggregate(rows, names, palette::PSC, TOP_CATEGORIES);
    let dropped = aggregation.dropped.clone();
    CategorySection {
        buckets: aggregation.into_top(TOP_CATEGORIES),
        dropped,
    }
}

/// Split out the multiple-recipients row, keep positive rows and color the top.
pub fn recipient_section(
    rows: Vec<RecipientSpending>,
    palette: &[palette::Color],
    top_n: usize,
) -> RecipientSection {
    let list = RecipientList::split(rows);
    let recipients = list
        .recipients
        .into_iter()
        .filter(|r| r.amount > 0.0)
        .collect();

    RecipientSection {
        recipients: color_top(recipients, palette, top_n),
        amount_for_multiple_recipients: list.amount_for_multiple_recipients,
    }
}

pub async fn load(
    client: &SpendingClient,
    names: &CategoryNameTable,
    settings: &Settings,
    period: FiscalPeriod,
    policy: FanOutPolicy,
) -> ApiResult<Dashboard> {
    debug!(period = %period, ?policy, "Loading dashboard");

    let all_recipients = RecipientFilter::All;
    let agencies = client.top_agencies(period, TOP_AGENCIES as u32);
    let categories = client.psc_spending(period);
    let recipients = client.recipients(&all_recipients, period);
    let covid = client.covid_recipients(&[], period, TOP_COVID_RECIPIENTS as u32);

    let mut dashboard = Dashboard {
        period_label: period.label(),
        agencies: None,
        categories: None,
        recipients: None,
        covid_recipients: None,
        failed_sections: Vec::new(),
    };

    match policy {
        FanOutPolicy::FailFast => {
            let (agencies, categories, recipients, covid) =
                tokio::try_join!(agencies, categories, recipients, covid)?;

            dashboard.agencies = Some(agency_section(agencies, settings));
            dashboard.categories = Some(category_section(&categories, names));
            dashboard.recipients = Some(recipient_section(
                recipients,
                palette::RECIPIENT,
                TOP_RECIPIENTS,
            ));
            dashboard.covid_recipients = Some(recipient_section(
                covid,
                palette::COVID_RECIPIENT,
                TOP_COVID_RECIPIENTS,
            ));
        }
        FanOutPolicy::Partial => {
            let (agencies, categories, recipients, covid) =
                tokio::join!(agencies, categories, recipients, covid);

            let mut errors: Vec<(&'static str, ApiError)> = Vec::new();

            dashboard.agencies =
                keep("agencies", agencies, &mut errors).map(|rows| agency_section(rows, settings));
            dashboard.categories = keep("categories", categories, &mut errors)
                .map(|rows| category_section(&rows, names));
            dashboard.recipients = keep("recipients", recipients, &mut errors)
                .map(|rows| recipient_section(rows, palette::RECIPIENT, TOP_RECIPIENTS));
            dashboard.covid_recipients = keep("covid_recipients", covid, &mut errors).map(|rows| {
                recipient_section(rows, palette::COVID_RECIPIENT, TOP_COVID_RECIPIENTS)
            });

            if errors.len() == 4 {
                // Every section failed; report the first failure for the whole screen.
                if let Some((_, error)) = errors.into_iter().next() {
                    return Err(error);
                }
            } else {
                dashboard.failed_sections = errors
                    .into_iter()
                    .map(|(section, error)| SectionFailure {
                        section,
                        message: error.user_message(),
                    })
                    .collect();
            }
        }
    }

    Ok(dashboard)
}

fn keep<T>(
    section: &'static str,
    result: ApiResult<T>,
    errors: &mut Vec<(&'static str, ApiError)>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(section, error = %error, "Dashboard section failed");
            errors.push((section, error));
            None
        }
    }
}
