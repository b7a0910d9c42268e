//! Request payloads for the USASpending search endpoints.

use serde::Serialize;

use crate::fiscal::FiscalPeriod;

/// Contract award types (definitive contracts, purchase orders, delivery orders, BPA calls).
pub const CONTRACT_AWARD_TYPES: &[&str] = &["A", "B", "C", "D"];

/// Disaster Emergency Fund codes for COVID-19 appropriations.
pub const COVID_DEF_CODES: &[&str] = &["L", "M", "N", "O", "P", "U", "V"];

pub const AWARD_FIELDS: &[&str] = &[
    "Award ID",
    "Recipient Name",
    "Award Amount",
    "Description",
    "Place of Performance State Code",
    "Place of Performance Country Code",
    "generated_internal_id",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimePeriod {
    pub start_date: String,
    pub end_date: String,
}

impl From<FiscalPeriod> for TimePeriod {
    fn from(period: FiscalPeriod) -> Self {
        let range = period.date_range();
        Self {
            start_date: range.start_iso(),
            end_date: range.end_iso(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgencyFilter {
    #[serde(rename = "type")]
    pub agency_type: &'static str,
    pub tier: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub country: &'static str,
    pub state: String,
}

impl Location {
    pub fn us_state(state: &str) -> Self {
        Self {
            country: "USA",
            state: state.to_string(),
        }
    }
}

/// The `filters` object shared by the search endpoints. Unset filters are
/// left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub award_type_codes: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agencies: Option<Vec<AgencyFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_search_text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psc_codes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub naics_codes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_performance_locations: Option<Vec<Location>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub def_codes: Option<Vec<&'static str>>,
    pub time_period: Vec<TimePeriod>,
}

impl SearchFilters {
    pub fn for_period(period: FiscalPeriod) -> Self {
        Self {
            time_period: vec![period.into()],
            ..Default::default()
        }
    }

    pub fn funding_agency(mut self, tier: &'static str, name: &str) -> Self {
        self.agencies = Some(vec![AgencyFilter {
            agency_type: "funding",
            tier,
            name: name.to_string(),
        }]);
        self
    }

    pub fn covid(mut self) -> Self {
        self.def_codes = Some(COVID_DEF_CODES.to_vec());
        self
    }

    pub fn contracts(mut self) -> Self {
        self.award_type_codes = Some(CONTRACT_AWARD_TYPES.to_vec());
        self
    }
}

/// Body for `search/spending_by_category/<category>/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,
    pub filters: SearchFilters,
    pub limit: u32,
}

/// Body for `search/spending_by_award/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AwardSearchRequest {
    pub filters: SearchFilters,
    pub fields: &'static [&'static str],
    pub sort: &'static str,
    pub limit: u32,
}

impl AwardSearchRequest {
    pub fn new(filters: SearchFilters) -> Self {
        Self {
            filters,
            fields: AWARD_FIELDS,
            sort: "Award Amount",
            limit: 100,
        }
    }
}

/// Body for `subawards/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubawardRequest {
    pub page: u32,
    pub limit: u32,
    pub sort: &'static str,
    pub order: &'static str,
    pub award_id: String,
}

impl SubawardRequest {
    pub fn first_page(award_id: &str) -> Self {
        Self {
            page: 1,
            limit: 100,
            sort: "amount",
            order: "desc",
            award_id: award_id.to_string(),
        }
    }
}

/// How a recipient list is narrowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipientFilter {
    All,
    Psc(String),
    State(String),
    Industry(String),
    /// Recipients cannot be filtered by federal account upstream; this
    /// variant adds no filter.
    FederalAccount(String),
}

impl RecipientFilter {
    pub fn apply(&self, mut filters: SearchFilters) -> SearchFilters {
        match self {
            Self::Psc(code) if !code.is_empty() => {
                filters.psc_codes = Some(vec![code.clone()]);
            }
            Self::State(code) if !code.is_empty() => {
                filters.place_of_performance_locations = Some(vec![Location::us_state(code)]);
            }
            Self::Industry(code) if !code.is_empty() => {
                filters.naics_codes = Some(vec![code.clone()]);
            }
            _ => {}
        }
        filters
    }
}

/// How an award list is narrowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AwardFilter {
    SubAgency(String),
    Recipient(String),
    PscAndRecipient { psc_code: String, recipient_uei: String },
    StateAndRecipient { state_code: String, recipient_uei: String },
    IndustryAndRecipient { naics_code: String, recipient_uei: String },
    CovidRecipient(String),
    Keyword(String),
}

impl AwardFilter {
    pub fn apply(&self, filters: SearchFilters) -> SearchFilters {
        let mut filters = filters.contracts();
        match self {
            Self::SubAgency(name) => {
                filters = filters.funding_agency("subtier", name);
            }
            Self::Recipient(uei) => {
                filters.recipient_search_text = Some(vec![uei.clone()]);
            }
            Self::PscAndRecipient {
                psc_code,
                recipient_uei,
            } => {
                filters.recipient_search_text = Some(vec![recipient_uei.clone()]);
                filters.psc_codes = Some(vec![psc_code.clone()]);
            }
            Self::StateAndRecipient {
                state_code,
                recipient_uei,
            } => {
                filters.recipient_search_text = Some(vec![recipient_uei.clone()]);
                filters.place_of_performance_locations =
                    Some(vec![Location::us_state(state_code)]);
            }
            Self::IndustryAndRecipient {
                naics_code,
                recipient_uei,
            } => {
                filters.recipient_search_text = Some(vec![recipient_uei.clone()]);
                filters.naics_codes = Some(vec![naics_code.clone()]);
            }
            Self::CovidRecipient(uei) => {
                filters.recipient_search_text = Some(vec![uei.clone()]);
                filters = filters.covid();
            }
            Self::Keyword(text) => {
                filters.keywords = Some(vec![text.clone()]);
            }
        }
        filters
    }
}
