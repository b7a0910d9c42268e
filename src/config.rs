use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// How a screen that fans out several upstream requests reacts to a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FanOutPolicy {
    /// The first failing request fails the whole screen.
    #[default]
    FailFast,
    /// Failed sections are reported individually next to the ones that loaded.
    Partial,
}

impl FromStr for FanOutPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fail_fast" | "fail-fast" | "failfast" => Ok(Self::FailFast),
            "partial" => Ok(Self::Partial),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub database_path: PathBuf,
    pub migrations_path: PathBuf,
    /// Optional override for the bundled PSC name table.
    pub psc_table_path: Option<PathBuf>,
    pub fan_out: FanOutPolicy,
}

pub const DEFAULT_API_BASE_URL: &str = "https://api.usaspending.gov/api/v2";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 7070,
            api_base_url: DEFAULT_API_BASE_URL.into(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            database_path: PathBuf::from("data/govspend.db"),
            migrations_path: PathBuf::from("migrations"),
            psc_table_path: None,
            fan_out: FanOutPolicy::FailFast,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let fan_out = match env::var("GOVSPEND_FAN_OUT") {
            Ok(v) => v.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %v, "Unknown GOVSPEND_FAN_OUT, using fail_fast");
                FanOutPolicy::FailFast
            }),
            Err(_) => defaults.fan_out,
        };

        let request_timeout = env::var("GOVSPEND_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| match v.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    tracing::warn!(value = %v, "Invalid GOVSPEND_REQUEST_TIMEOUT_SECS, using default");
                    None
                }
            })
            .unwrap_or(defaults.request_timeout);

        Self {
            host: env::var("GOVSPEND_HOST").unwrap_or(defaults.host),
            port: env::var("GOVSPEND_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            api_base_url: env::var("GOVSPEND_API_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            request_timeout,
            database_path: env::var("GOVSPEND_DATABASE_URL")
                .map(|v| {
                    PathBuf::from(
                        v.strip_prefix("sqlite://")
                            .or_else(|| v.strip_prefix("sqlite:"))
                            .unwrap_or(&v),
                    )
                })
                .unwrap_or(defaults.database_path),
            migrations_path: env::var("GOVSPEND_MIGRATIONS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.migrations_path),
            psc_table_path: env::var("GOVSPEND_PSC_TABLE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            fan_out,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fan_out_policy_parsing() {
        assert_eq!("partial".parse(), Ok(FanOutPolicy::Partial));
        assert_eq!("FAIL_FAST".parse(), Ok(FanOutPolicy::FailFast));
        assert_eq!("fail-fast".parse(), Ok(FanOutPolicy::FailFast));
        assert!("sometimes".parse::<FanOutPolicy>().is_err());
    }

    #[test]
    fn test_default_address() {
        let config = Config::default();
        assert_eq!(config.address(), "0.0.0.0:7070");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.fan_out, FanOutPolicy::FailFast);
    }
}
