// src/config.rs
use dotenv::dotenv;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_BACKEND_URL: &str = "https://mobilidade.onrender.com";
pub const DEFAULT_CHARTS_BASE_URL: &str = "https://charts.mongodb.com/charts-mobilidade";

/// Charts shown on the spatial filter page, in display order.
pub const DEFAULT_CHART_IDS: [&str; 6] = [
    "d725cd12-caa3-44be-a974-824ea60c5ce7",
    "45c15229-d420-4f97-bf05-b36adda4eb8c",
    "ea3ce4e0-fe9c-4761-9f27-63aae29857c2",
    "03934f33-693c-4634-b694-3b6ef45a41ec",
    "b6943605-c9bc-480b-95d3-97c6fffe3253",
    "306c587e-afd0-4fac-ba67-077625318a85",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {reason}")]
    InvalidUrl { var: &'static str, reason: String },
    #[error("{var} has an invalid value {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Base URL of the analytics backend. No trailing slash.
    pub backend_url: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub request_timeout: Duration,
    pub max_upload_bytes: usize,
    pub charts_base_url: String,
    pub chart_ids: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            request_timeout: Duration::from_secs(60),
            max_upload_bytes: 50 * 1024 * 1024,
            charts_base_url: DEFAULT_CHARTS_BASE_URL.to_string(),
            chart_ids: DEFAULT_CHART_IDS.iter().map(|id| id.to_string()).collect(),
        }
    }
}

impl DashboardConfig {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    /// Unset or blank variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(raw) = get("BACKEND_URL") {
            cfg.backend_url = parse_base_url("BACKEND_URL", &raw)?;
        }

        if let Some(raw) = get("BIND_ADDR") {
            cfg.bind_addr = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: "BIND_ADDR",
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = get("MAX_WORKERS") {
            cfg.max_workers = parse_positive("MAX_WORKERS", &raw)?;
        }

        if let Some(raw) = get("REQUEST_TIMEOUT_SECS") {
            let secs = parse_positive("REQUEST_TIMEOUT_SECS", &raw)?;
            cfg.request_timeout = Duration::from_secs(secs as u64);
        }

        if let Some(raw) = get("MAX_UPLOAD_MB") {
            cfg.max_upload_bytes = parse_positive("MAX_UPLOAD_MB", &raw)?
                .checked_mul(1024 * 1024)
                .ok_or_else(|| ConfigError::InvalidValue {
                    var: "MAX_UPLOAD_MB",
                    value: raw.clone(),
                })?;
        }

        if let Some(raw) = get("CHARTS_BASE_URL") {
            cfg.charts_base_url = parse_base_url("CHARTS_BASE_URL", &raw)?;
        }

        if let Some(raw) = get("CHART_IDS") {
            let ids: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect();
            if ids.is_empty() {
                return Err(ConfigError::InvalidValue {
                    var: "CHART_IDS",
                    value: raw,
                });
            }
            cfg.chart_ids = ids;
        }

        Ok(cfg)
    }
}

fn parse_base_url(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    let parsed = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
        var,
        reason: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            var,
            reason: format!("unsupported scheme {}", parsed.scheme()),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

fn parse_positive(var: &'static str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
        }),
    }
}
