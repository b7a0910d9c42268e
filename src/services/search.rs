use serde::Serialize;

use crate::client::{ApiResult, AwardFilter, SpendingClient};
use crate::fiscal::FiscalPeriod;
use crate::models::AwardSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: &'static str,
    pub icon: &'static str,
}

pub const SUGGESTIONS: &[Suggestion] = &[
    Suggestion { text: "F-35 Lightning II", icon: "airplane" },
    Suggestion { text: "Artemis", icon: "moon.stars.fill" },
    Suggestion { text: "Cybersecurity", icon: "lock.shield.fill" },
    Suggestion { text: "National Parks", icon: "tree.fill" },
    Suggestion { text: "Artificial Intelligence", icon: "brain.head.profile.fill" },
    Suggestion { text: "Chicken Fajita", icon: "fork.knife" },
    Suggestion { text: "Musical Instruments", icon: "guitars.fill" },
    Suggestion { text: "James Webb Space Telescope", icon: "binoculars.circle.fill" },
];

#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub keyword: String,
    /// False when the keyword was blank and no search was run.
    pub searched: bool,
    pub awards: Vec<AwardSummary>,
}

/// Keyword search over contract awards. A blank keyword returns no results
/// without calling the API.
pub async fn awards(
    client: &SpendingClient,
    keyword: &str,
    period: FiscalPeriod,
) -> ApiResult<SearchResults> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Ok(SearchResults {
            keyword: String::new(),
            searched: false,
            awards: Vec::new(),
        });
    }

    let awards = client
        .awards(&AwardFilter::Keyword(keyword.to_string()), period)
        .await?;
    tracing::debug!(keyword, results = awards.len(), "Award search completed");

    Ok(SearchResults {
        keyword: keyword.to_string(),
        searched: true,
        awards,
    })
}
