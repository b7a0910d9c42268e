use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::client::SpendingClient;
use crate::config::Config;
use crate::db::{create_pool, migrations};
use crate::handlers;
use crate::psc::CategoryNameTable;
use crate::state::AppState;
use crate::store::SqliteStore;

/// Build the application state and Axum router from a [`Config`].
///
/// Creates the settings database pool, runs migrations, loads the PSC name
/// table (bundled, or the file named by `psc_table_path`) and the API client.
pub fn build_app(config: Config) -> Result<(AppState, Router), Box<dyn std::error::Error>> {
    let db = create_pool(&config.database_path)?;

    {
        let conn = db.get()?;
        migrations::run_migrations(&conn, &config.migrations_path)?;
    }

    let psc_names = match &config.psc_table_path {
        Some(path) => CategoryNameTable::from_path(path)?,
        None => CategoryNameTable::bundled(),
    };
    tracing::info!(
        version = psc_names.version(),
        entries = psc_names.len(),
        "PSC name table ready"
    );

    let client = SpendingClient::new(&config.api_base_url, config.request_timeout)?;
    tracing::info!(base_url = client.base_url(), fan_out = ?config.fan_out, "USASpending client ready");

    let state = AppState::new(config, client, Arc::new(SqliteStore::new(db)), psc_names);
    let app = router(state.clone());

    Ok((state, app))
}

/// The full router with middleware, for an already-built state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the router to `host:port` and spawn the server as a tokio task.
///
/// Returns the actual port the server bound to (useful when `port` is 0 for
/// OS-assigned ports) and a [`JoinHandle`] for the server task.
pub async fn serve(
    app: Router,
    host: &str,
    port: u16,
) -> Result<(u16, JoinHandle<()>), Box<dyn std::error::Error>> {
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr).await?;
    let actual_port = listener.local_addr()?.port();

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "Server error");
        }
    });

    Ok((actual_port, handle))
}
