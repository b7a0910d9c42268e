use serde::{Deserialize, Serialize};

/// A top-tier funding agency from `spending_by_category/funding_agency`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencySpending {
    pub name: String,
    pub code: String,
    pub amount: f64,
}

impl AgencySpending {
    /// Name without the leading "Department of ", for compact chart labels.
    pub fn short_name(&self) -> &str {
        self.name
            .strip_prefix("Department of ")
            .unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubAgencySpending {
    pub name: String,
    pub amount: f64,
    #[serde(rename(deserialize = "agency_name"))]
    pub parent_agency: String,
}
