//! Shared test utilities for integration tests.
//!
//! `MockApi` serves canned USASpending responses from an axum server on an
//! ephemeral port. `TestClient` drives the application router against it with
//! an in-memory settings store.

#![allow(dead_code)]

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use govspend::client::SpendingClient;
use govspend::config::{Config, FanOutPolicy};
use govspend::psc::CategoryNameTable;
use govspend::server;
use govspend::state::AppState;
use govspend::store::{KeyValueStore, MemoryStore};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

/// How the mock upstream should answer. Endpoint names are the
/// spending-by-category names plus `awards`, `award_details`, `subawards`
/// and `program_activities`.
#[derive(Clone, Default)]
pub struct MockApi {
    failing: HashSet<&'static str>,
    malformed: HashSet<&'static str>,
    requests: Arc<Mutex<Vec<(String, Value)>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `endpoint` with HTTP 500.
    pub fn failing(mut self, endpoint: &'static str) -> Self {
        self.failing.insert(endpoint);
        self
    }

    /// Answer `endpoint` with 200 and a body that does not decode.
    pub fn malformed(mut self, endpoint: &'static str) -> Self {
        self.malformed.insert(endpoint);
        self
    }

    /// Requests received so far as (endpoint, JSON body).
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, endpoint: &str) -> Vec<Value> {
        self.requests()
            .into_iter()
            .filter(|(name, _)| name == endpoint)
            .map(|(_, body)| body)
            .collect()
    }

    /// Serve on 127.0.0.1 and return the API base URL.
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route(
                "/api/v2/search/spending_by_category/:category/",
                post(category_handler),
            )
            .route("/api/v2/search/spending_by_award/", post(awards_handler))
            .route("/api/v2/awards/:id/", get(award_details_handler))
            .route("/api/v2/subawards/", post(subawards_handler))
            .route(
                "/api/v2/federal_accounts/:code/program_activities",
                get(program_activities_handler),
            )
            .with_state(self.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://127.0.0.1:{}/api/v2", port)
    }

    fn respond(&self, endpoint: &str, body: Value, payload: Value) -> Response {
        self.requests
            .lock()
            .unwrap()
            .push((endpoint.to_string(), body));

        if self.failing.contains(endpoint) {
            return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response();
        }
        if self.malformed.contains(endpoint) {
            return (StatusCode::OK, "{\"results\": \"not a list\"}").into_response();
        }
        Json(payload).into_response()
    }
}

async fn category_handler(
    State(mock): State<MockApi>,
    Path(category): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let results = match category.as_str() {
        "funding_agency" => agencies_fixture(),
        "funding_subagency" => json!([
            {"name": "Defense Logistics Agency", "amount": 50000.0, "agency_name": "Department of Defense"},
            {"name": "Dormant Office", "amount": 0.0, "agency_name": "Department of Defense"}
        ]),
        "psc" => psc_fixture(),
        "recipient" => recipients_fixture(),
        "state_territory" => json!([{"name": "Texas", "code": "TX", "amount": 10.0}]),
        "naics" => json!([{"name": "Engineering Services", "code": "541330", "amount": 20.0}]),
        "federal_account" => json!([
            {"name": "Operation and Maintenance, Army", "code": "021-2020", "amount": 30.0}
        ]),
        _ => json!([]),
    };
    let endpoint = category.clone();
    mock.respond(&endpoint, body, json!({ "results": results }))
}

async fn awards_handler(State(mock): State<MockApi>, Json(body): Json<Value>) -> Response {
    mock.respond(
        "awards",
        body,
        json!({"results": [{
            "Award ID": "W911",
            "Recipient Name": "ACME CORP",
            "Award Amount": 1234.5,
            "Description": "WIDGETS",
            "Place of Performance State Code": "TX",
            "Place of Performance Country Code": "USA",
            "generated_internal_id": "CONT_AWD_W911"
        }]}),
    )
}

async fn award_details_handler(State(mock): State<MockApi>, Path(id): Path<String>) -> Response {
    mock.respond(
        "award_details",
        json!({ "id": id }),
        json!({
            "type_description": "Definitive Contract",
            "total_obligation": 5000.0,
            "period_of_performance": {"start_date": "2023-01-01", "end_date": "2025-01-01"},
            "awarding_agency": {
                "toptier_agency": {"name": "Department of Defense"},
                "subtier_agency": {"name": "Department of the Army"},
                "office_agency_name": "W6QK ACC-PICA"
            },
            "funding_agency": null
        }),
    )
}

async fn subawards_handler(State(mock): State<MockApi>, Json(body): Json<Value>) -> Response {
    mock.respond(
        "subawards",
        body,
        json!({"results": [
            {"subaward_number": "S1", "amount": 100.0, "action_date": "2023-11-15", "recipient_name": "SUB ONE"},
            {"subaward_number": "S2", "amount": 50.0, "action_date": "2024-02-01"},
            {"subaward_number": "S3", "amount": null, "action_date": "2023-12-01"},
            {"subaward_number": "S4", "amount": 25.0, "action_date": "not a date"}
        ]}),
    )
}

async fn program_activities_handler(
    State(mock): State<MockApi>,
    Path(code): Path<String>,
) -> Response {
    mock.respond(
        "program_activities",
        json!({ "code": code }),
        json!({"results": [{"name": "OPERATIONS", "code": "0001", "type": "PAC"}]}),
    )
}

pub fn agencies_fixture() -> Value {
    json!([
        {"name": "Department of Defense", "code": "097", "amount": 800000000000.0, "id": 126},
        {"name": "Department of Health and Human Services", "code": "075", "amount": 200000000000.0, "id": 806},
        {"name": "Refunds", "code": "000", "amount": -5.0, "id": 1}
    ])
}

/// PSC rows: AN (R&D), Q (services) twice, 65 (products), an unknown "ZZ"
/// prefix and an empty code.
pub fn psc_fixture() -> Value {
    json!([
        {"code": "AN11", "name": "HEALTH R&D", "amount": 100.0},
        {"code": "Q201", "name": "GENERAL HEALTH CARE", "amount": 300.0},
        {"code": "Q999", "name": "OTHER MEDICAL", "amount": 25.0},
        {"code": "6515", "name": "MEDICAL INSTRUMENTS", "amount": 50.0},
        {"code": "ZZ99", "name": "UNKNOWN", "amount": 999.0},
        {"code": "", "name": "BLANK", "amount": 7.0}
    ])
}

pub fn recipients_fixture() -> Value {
    json!([
        {"name": "MULTIPLE RECIPIENTS", "amount": 1000.0, "recipient_id": null, "code": null},
        {"name": "ACME CORP", "amount": 500.0, "recipient_id": "abc-R", "uei": "UEI123", "code": "123"},
        {"name": "ZERO INC", "amount": 0.0, "recipient_id": "zero-R", "uei": "UEI000", "code": "000"}
    ])
}

/// A base URL nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/api/v2", port)
}

/// Drives the application router with `oneshot` requests.
pub struct TestClient {
    state: AppState,
}

impl TestClient {
    /// Application backed by a mock upstream with default answers.
    pub async fn new() -> Self {
        Self::with_mock(&MockApi::new(), FanOutPolicy::FailFast).await
    }

    pub async fn with_mock(mock: &MockApi, fan_out: FanOutPolicy) -> Self {
        let base_url = mock.spawn().await;
        Self::with_base_url(&base_url, fan_out)
    }

    pub fn with_base_url(base_url: &str, fan_out: FanOutPolicy) -> Self {
        Self::with_store(base_url, fan_out, Arc::new(MemoryStore::new()))
    }

    pub fn with_store(
        base_url: &str,
        fan_out: FanOutPolicy,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        let config = Config {
            host: "127.0.0.1".into(),
            port: 7070,
            api_base_url: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            database_path: PathBuf::from(":memory:"),
            migrations_path: PathBuf::from("migrations"),
            psc_table_path: None,
            fan_out,
        };
        let client = SpendingClient::new(base_url, config.request_timeout)
            .expect("Failed to create API client");
        let state = AppState::new(config, client, store, CategoryNameTable::bundled());

        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn router(&self) -> Router {
        server::router(self.state.clone())
    }

    /// Make a GET request and return status and body.
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).to_string())
    }

    /// Make a GET request and parse the body as JSON.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self.get(uri).await;
        let value = serde_json::from_str(&body)
            .unwrap_or_else(|e| panic!("{} returned non-JSON body {:?}: {}", uri, body, e));
        (status, value)
    }

    /// Make a POST request with form data and parse the JSON response.
    pub async fn post_form(&self, uri: &str, form_data: &[(&str, &str)]) -> (StatusCode, Value) {
        let body = form_data
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let response = self
            .router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }
}
