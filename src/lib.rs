pub mod aggregate;
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod fiscal;
pub mod form_utils;
pub mod handlers;
pub mod load_state;
pub mod models;
pub mod palette;
pub mod psc;
pub mod server;
pub mod services;
pub mod state;
pub mod store;

/// Application version from Cargo.toml (single source of truth)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
