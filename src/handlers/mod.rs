pub mod agencies;
pub mod awards;
pub mod covid;
pub mod dashboard;
pub mod explore;
pub mod periods;
pub mod recipients;
pub mod search;
pub mod settings;

use axum::routing::get;
use axum::Router;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::fiscal::{current_fiscal_year, FiscalPeriod, Quarter, FIRST_FISCAL_YEAR};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // Periods
        .route("/api/periods", get(periods::index))
        // Dashboard
        .route("/api/dashboard", get(dashboard::index))
        // Agencies
        .route("/api/agencies", get(agencies::index))
        .route("/api/agencies/:name/sub-agencies", get(agencies::sub_agencies))
        .route("/api/sub-agencies/:name/awards", get(agencies::sub_agency_awards))
        // Explore
        .route("/api/explore/:tab", get(explore::index))
        .route(
            "/api/federal-accounts/:code/program-activities",
            get(explore::program_activities),
        )
        // Recipients
        .route("/api/recipients", get(recipients::index))
        .route("/api/recipients/:uei/awards", get(recipients::awards))
        // COVID-19
        .route("/api/covid/:category", get(covid::index))
        // Search
        .route("/api/search/awards", get(search::awards))
        .route("/api/search/suggestions", get(search::suggestions))
        // Awards
        .route("/api/awards/:id", get(awards::show))
        // Settings
        .route("/api/settings", get(settings::index).post(settings::update))
        // Health check
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `?year=&quarter=` shared by every period-scoped route.
#[derive(Debug, Default, Deserialize)]
pub struct PeriodParams {
    pub year: Option<i32>,
    pub quarter: Option<u8>,
}

impl PeriodParams {
    /// Missing values default to the whole current fiscal year.
    pub fn resolve(&self, today: NaiveDate) -> AppResult<FiscalPeriod> {
        let current = current_fiscal_year(today);
        let year = self.year.unwrap_or(current);
        if !(FIRST_FISCAL_YEAR..=current).contains(&year) {
            return Err(AppError::Validation(format!(
                "fiscal year must be between {} and {}, got {}",
                FIRST_FISCAL_YEAR, current, year
            )));
        }

        let quarter = match self.quarter {
            Some(q) => Quarter::try_from(q).map_err(AppError::Validation)?,
            None => Quarter::All,
        };

        Ok(FiscalPeriod::new(year, quarter))
    }
}

/// Treat `?psc=` and friends with blank values as absent.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
