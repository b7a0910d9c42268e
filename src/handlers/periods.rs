use axum::response::Json;
use serde::Serialize;

use crate::fiscal::{available_years, current_fiscal_year, Quarter};
use crate::handlers::today;

#[derive(Debug, Serialize)]
pub struct QuarterOption {
    pub value: Quarter,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PeriodOptions {
    pub current_fiscal_year: i32,
    pub available_years: Vec<i32>,
    pub quarters: Vec<QuarterOption>,
}

pub async fn index() -> Json<PeriodOptions> {
    let current = current_fiscal_year(today());
    Json(PeriodOptions {
        current_fiscal_year: current,
        available_years: available_years(current),
        quarters: Quarter::all()
            .iter()
            .map(|q| QuarterOption {
                value: *q,
                label: q.label(),
            })
            .collect(),
    })
}
