use std::str::FromStr;

use serde::Serialize;

use crate::aggregate::{aggregate, CategoryBucket};
use crate::client::{ApiResult, RecipientFilter, SpendingClient};
use crate::fiscal::FiscalPeriod;
use crate::models::{
    FederalAccountSpending, NaicsSpending, RecipientList, RecipientSpending, StateSpending,
};
use crate::psc::CategoryNameTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreTab {
    Psc,
    Recipients,
    States,
    Industries,
    FederalAccounts,
}

impl ExploreTab {
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Psc => "psc",
            Self::Recipients => "recipients",
            Self::States => "states",
            Self::Industries => "industries",
            Self::FederalAccounts => "federal-accounts",
        }
    }

    pub fn all() -> &'static [ExploreTab] {
        &[
            Self::Psc,
            Self::Recipients,
            Self::States,
            Self::Industries,
            Self::FederalAccounts,
        ]
    }
}

impl FromStr for ExploreTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|tab| tab.slug() == s)
            .ok_or_else(|| format!("unknown explore tab {:?}", s))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "tab", content = "rows", rename_all = "kebab-case")]
pub enum ExploreData {
    Psc(Vec<CategoryBucket>),
    Recipients(Vec<RecipientSpending>),
    States(Vec<StateSpending>),
    Industries(Vec<NaicsSpending>),
    FederalAccounts(Vec<FederalAccountSpending>),
}

impl ExploreData {
    pub fn len(&self) -> usize {
        match self {
            Self::Psc(rows) => rows.len(),
            Self::Recipients(rows) => rows.len(),
            Self::States(rows) => rows.len(),
            Self::Industries(rows) => rows.len(),
            Self::FederalAccounts(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub async fn load(
    client: &SpendingClient,
    names: &CategoryNameTable,
    tab: ExploreTab,
    period: FiscalPeriod,
) -> ApiResult<ExploreData> {
    let data = match tab {
        ExploreTab::Psc => {
            let rows = client.psc_spending(period).await?;
            // Full list, no chart colors.
            ExploreData::Psc(aggregate(&rows, names, &[], 0).buckets)
        }
        ExploreTab::Recipients => {
            let rows = client.recipients(&RecipientFilter::All, period).await?;
            ExploreData::Recipients(RecipientList::split(rows).recipients)
        }
        ExploreTab::States => ExploreData::States(client.state_spending(period).await?),
        ExploreTab::Industries => ExploreData::Industries(client.naics_spending(period).await?),
        ExploreTab::FederalAccounts => {
            ExploreData::FederalAccounts(client.federal_accounts(period).await?)
        }
    };

    tracing::debug!(tab = tab.slug(), rows = data.len(), "Explore tab loaded");
    Ok(data)
}
