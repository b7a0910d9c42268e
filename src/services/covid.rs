use std::str::FromStr;

use crate::client::{ApiResult, SpendingClient};
use crate::fiscal::FiscalPeriod;
use crate::models::RecipientList;

pub const COVID_RECIPIENT_LIMIT: u32 = 100;

/// Groupings on the COVID-19 screen, each a fixed set of PSC filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CovidCategory {
    All,
    Medical,
    Business,
    Logistics,
}

impl CovidCategory {
    pub fn psc_codes(&self) -> &'static [&'static str] {
        match self {
            Self::All => &[],
            Self::Medical => &["AN", "Q", "65", "66"],
            Self::Business => &["R708", "V", "99"],
            Self::Logistics => &["D", "V", "R4"],
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Medical => "medical",
            Self::Business => "business",
            Self::Logistics => "logistics",
        }
    }
}

impl FromStr for CovidCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "medical" => Ok(Self::Medical),
            "business" => Ok(Self::Business),
            "logistics" => Ok(Self::Logistics),
            _ => Err(format!("unknown COVID-19 category {:?}", s)),
        }
    }
}

pub async fn load(
    client: &SpendingClient,
    category: CovidCategory,
    period: FiscalPeriod,
) -> ApiResult<RecipientList> {
    let rows = client
        .covid_recipients(category.psc_codes(), period, COVID_RECIPIENT_LIMIT)
        .await?;
    Ok(RecipientList::split(rows))
}
