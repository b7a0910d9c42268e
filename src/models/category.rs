use serde::{Deserialize, Serialize};

use crate::aggregate::SpendingRecord;
use crate::models::to_cents;

/// A raw PSC row from `spending_by_category/psc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PscSpending {
    pub code: String,
    pub name: String,
    pub amount: f64,
}

impl SpendingRecord for PscSpending {
    fn code(&self) -> &str {
        &self.code
    }

    fn amount_cents(&self) -> i64 {
        to_cents(self.amount)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSpending {
    pub name: Option<String>,
    pub code: Option<String>,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaicsSpending {
    pub name: String,
    pub code: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FederalAccountSpending {
    pub name: String,
    pub code: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramActivity {
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub activity_type: String,
}
