use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fiscal::DateRange;
use crate::models::{sum_cents, to_cents};

/// A row from `search/spending_by_award`. The API keys columns by their
/// display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardSummary {
    #[serde(rename(deserialize = "Award ID"))]
    pub award_id: String,
    #[serde(rename(deserialize = "Recipient Name"))]
    pub recipient_name: String,
    #[serde(rename(deserialize = "Award Amount"))]
    pub award_amount: f64,
    #[serde(rename(deserialize = "Description"), default)]
    pub description: Option<String>,
    #[serde(rename(deserialize = "Place of Performance State Code"), default)]
    pub state: Option<String>,
    #[serde(rename(deserialize = "Place of Performance Country Code"), default)]
    pub country: Option<String>,
    #[serde(default)]
    pub generated_internal_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardDetails {
    pub awarding_agency: Option<AwardAgency>,
    pub funding_agency: Option<AwardAgency>,
    pub period_of_performance: Option<PeriodOfPerformance>,
    pub type_description: Option<String>,
    #[serde(rename(deserialize = "total_obligation"))]
    pub potential_total_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardAgency {
    #[serde(rename(deserialize = "toptier_agency"))]
    pub top_tier_agency: Option<AgencyDetails>,
    #[serde(rename(deserialize = "subtier_agency"))]
    pub sub_tier_agency: Option<AgencyDetails>,
    pub office_agency_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyDetails {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodOfPerformance {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subaward {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub recipient_name: Option<String>,
    pub action_date: Option<String>,
    pub subaward_number: Option<String>,
}

impl Subaward {
    pub fn action_date(&self) -> Option<NaiveDate> {
        self.action_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }
}

/// Sum of subaward amounts whose action date falls inside `range`, in cents.
///
/// Rows without a parseable date or an amount are skipped. Returns `None`
/// unless the sum is positive.
pub fn obligated_in_range(subawards: &[Subaward], range: &DateRange) -> Option<i64> {
    let total = sum_cents(
        subawards
            .iter()
            .filter_map(|s| Some((s.action_date()?, s.amount?)))
            .filter(|(date, _)| range.contains(*date))
            .map(|(_, amount)| to_cents(amount)),
    );

    (total > 0).then_some(total)
}
