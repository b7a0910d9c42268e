pub mod agency;
pub mod award;
pub mod category;
pub mod recipient;
pub mod settings;

use serde::{Deserialize, Serialize};

pub use agency::{AgencySpending, SubAgencySpending};
pub use award::{AgencyDetails, AwardAgency, AwardDetails, AwardSummary, PeriodOfPerformance, Subaward};
pub use category::{
    FederalAccountSpending, NaicsSpending, ProgramActivity, PscSpending, StateSpending,
};
pub use recipient::{RecipientList, RecipientSpending};
pub use settings::Settings;

use crate::palette::Color;

/// Every list endpoint wraps its rows in `{"results": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsPage<T> {
    pub results: Vec<T>,
}

/// A row paired with its chart color, if it got one.
#[derive(Debug, Clone, Serialize)]
pub struct Colored<T> {
    #[serde(flatten)]
    pub item: T,
    pub color: Option<Color>,
}

/// Convert an API dollar amount to cents.
pub fn to_cents(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}

/// Sum cent amounts, clamping at the `i64` bounds instead of overflowing.
pub fn sum_cents<I: IntoIterator<Item = i64>>(amounts: I) -> i64 {
    amounts.into_iter().fold(0, i64::saturating_add)
}
