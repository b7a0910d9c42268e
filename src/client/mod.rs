//! Client for the USASpending.gov v2 REST API.

pub mod query;

use std::time::{Duration, Instant};

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::fiscal::FiscalPeriod;
use crate::models::{
    AgencySpending, AwardDetails, AwardSummary, FederalAccountSpending, NaicsSpending,
    ProgramActivity, PscSpending, RecipientSpending, ResultsPage, StateSpending,
    SubAgencySpending, Subaward,
};

pub use query::{AwardFilter, RecipientFilter};
use query::{AwardSearchRequest, CategoryRequest, SearchFilters, SubawardRequest};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("could not decode response: {source}")]
    Decoding {
        source: serde_json::Error,
        body: String,
    },

    #[error("server responded with status {status}")]
    InvalidServerResponse { status: u16, body: String },
}

impl ApiError {
    /// Message suitable for showing to the person using the app.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::InvalidUrl(_) => "The API endpoint URL is invalid.".to_string(),
            ApiError::Network(_) => {
                "Network Error: Please check your internet connection and try again.".to_string()
            }
            ApiError::Decoding { .. } => {
                "Data Parsing Error: The server's response was in an unexpected format."
                    .to_string()
            }
            ApiError::InvalidServerResponse { status, .. } => format!(
                "Server Error: Received status code {}. Please try again later.",
                status
            ),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone)]
pub struct SpendingClient {
    http: Client,
    base_url: String,
}

impl SpendingClient {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if reqwest::Url::parse(&base_url).is_err() {
            return Err(AppError::Config(format!(
                "Invalid USASpending API base URL: {}",
                base_url
            )));
        }

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("govspend/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn top_agencies(
        &self,
        period: FiscalPeriod,
        limit: u32,
    ) -> ApiResult<Vec<AgencySpending>> {
        self.category("funding_agency", SearchFilters::for_period(period), limit)
            .await
    }

    pub async fn sub_agencies(
        &self,
        agency_name: &str,
        period: FiscalPeriod,
    ) -> ApiResult<Vec<SubAgencySpending>> {
        let filters = SearchFilters::for_period(period).funding_agency("toptier", agency_name);
        self.category("funding_subagency", filters, 100).await
    }

    pub async fn psc_spending(&self, period: FiscalPeriod) -> ApiResult<Vec<PscSpending>> {
        self.category("psc", SearchFilters::for_period(period), 100)
            .await
    }

    pub async fn recipients(
        &self,
        filter: &RecipientFilter,
        period: FiscalPeriod,
    ) -> ApiResult<Vec<RecipientSpending>> {
        let filters = filter.apply(SearchFilters::for_period(period));
        self.category("recipient", filters, 100).await
    }

    /// The state/territory endpoint is queried without a `category` field.
    pub async fn state_spending(&self, period: FiscalPeriod) -> ApiResult<Vec<StateSpending>> {
        let request = CategoryRequest {
            category: None,
            filters: SearchFilters::for_period(period),
            limit: 100,
        };
        self.post_results("search/spending_by_category/state_territory/", &request)
            .await
    }

    pub async fn naics_spending(&self, period: FiscalPeriod) -> ApiResult<Vec<NaicsSpending>> {
        self.category("naics", SearchFilters::for_period(period), 50)
            .await
    }

    pub async fn federal_accounts(
        &self,
        period: FiscalPeriod,
    ) -> ApiResult<Vec<FederalAccountSpending>> {
        self.category("federal_account", SearchFilters::for_period(period), 100)
            .await
    }

    /// Recipients of COVID-19 appropriations, optionally narrowed to PSC codes.
    pub async fn covid_recipients(
        &self,
        psc_codes: &[&str],
        period: FiscalPeriod,
        limit: u32,
    ) -> ApiResult<Vec<RecipientSpending>> {
        let mut filters = SearchFilters::for_period(period).covid();
        if !psc_codes.is_empty() {
            filters.psc_codes = Some(psc_codes.iter().map(|c| c.to_string()).collect());
        }
        self.category("recipient", filters, limit).await
    }

    pub async fn program_activities(
        &self,
        account_code: &str,
        fiscal_year: i32,
    ) -> ApiResult<Vec<ProgramActivity>> {
        let path = format!(
            "federal_accounts/{}/program_activities?fiscal_year={}",
            urlencoding::encode(account_code),
            fiscal_year
        );
        let page: ResultsPage<ProgramActivity> = self.get(&path).await?;
        Ok(page.results)
    }

    pub async fn awards(
        &self,
        filter: &AwardFilter,
        period: FiscalPeriod,
    ) -> ApiResult<Vec<AwardSummary>> {
        let filters = filter.apply(SearchFilters::for_period(period));
        let request = AwardSearchRequest::new(filters);
        self.post_results("search/spending_by_award/", &request)
            .await
    }

    pub async fn award_details(&self, award_id: &str) -> ApiResult<AwardDetails> {
        let path = format!("awards/{}/", urlencoding::encode(award_id));
        self.get(&path).await
    }

    pub async fn subawards(&self, award_id: &str) -> ApiResult<Vec<Subaward>> {
        self.post_results("subawards/", &SubawardRequest::first_page(award_id))
            .await
    }

    async fn category<T: DeserializeOwned>(
        &self,
        category: &'static str,
        filters: SearchFilters,
        limit: u32,
    ) -> ApiResult<Vec<T>> {
        let request = CategoryRequest {
            category: Some(category),
            filters,
            limit,
        };
        let path = format!("search/spending_by_category/{}/", category);
        self.post_results(&path, &request).await
    }

    async fn post_results<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<Vec<T>> {
        let page: ResultsPage<T> = self.execute(Method::POST, path, Some(body)).await?;
        Ok(page.results)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute::<T, ()>(Method::GET, path, None).await
    }

    async fn execute<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let url = reqwest::Url::parse(&url).map_err(|_| ApiError::InvalidUrl(url))?;

        let mut request = self.http.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let started = Instant::now();
        let response = request.send().await.map_err(|e| {
            warn!(%method, endpoint = path, error = %e, "USASpending request failed");
            ApiError::Network(e)
        })?;
        let status = response.status();
        let text = response.text().await?;

        debug!(
            %method,
            endpoint = path,
            status = status.as_u16(),
            duration_ms = started.elapsed().as_millis() as u64,
            "USASpending request completed"
        );

        if status != StatusCode::OK {
            return Err(ApiError::InvalidServerResponse {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|source| {
            warn!(endpoint = path, error = %source, "Unexpected USASpending response body");
            ApiError::Decoding { source, body: text }
        })
    }
}
