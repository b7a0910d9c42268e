use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::filters;

/// Estimated total federal tax revenue used to scale a personal contribution
/// ($4.9 trillion, FY2024).
pub const TOTAL_FEDERAL_TAX_REVENUE: f64 = 4_900_000_000_000.0;

pub const TAX_CONTRIBUTION_KEY: &str = "tax_contribution";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// The user's annual federal tax contribution in dollars.
    pub tax_contribution: f64,
}

impl Settings {
    pub fn from_map(map: HashMap<String, String>) -> Self {
        Self {
            tax_contribution: map
                .get(TAX_CONTRIBUTION_KEY)
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|v| v.is_finite() && *v >= 0.0)
                .unwrap_or(0.0),
        }
    }

    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert(
            TAX_CONTRIBUTION_KEY.into(),
            self.tax_contribution.to_string(),
        );
        map
    }

    /// The user's proportional share of `amount` dollars.
    pub fn contribution_for(&self, amount: f64) -> f64 {
        if self.tax_contribution <= 0.0 {
            return 0.0;
        }
        self.tax_contribution / TOTAL_FEDERAL_TAX_REVENUE * amount
    }

    /// Share of an amount given in cents, formatted with two decimals.
    pub fn format_contribution(&self, cents: i64) -> String {
        let dollars = self.contribution_for(cents as f64 / 100.0);
        filters::format_usd((dollars * 100.0).round() as i64, 2)
    }
}
