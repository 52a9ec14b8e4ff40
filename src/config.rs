//! Environment-driven configuration with sensible local defaults.

use std::env;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_UPSTREAM_BASE: &str = "https://pokeapi.co/api/v2/";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the API server binds to (`POKEARENA_BIND`).
    pub bind_addr: String,
    /// Base URL of the upstream catalog, trailing slash enforced
    /// (`POKEARENA_UPSTREAM`).
    pub upstream_base: String,
    /// Origin allowed by CORS for the browser frontend
    /// (`POKEARENA_CORS_ORIGIN`).
    pub cors_origin: String,
    /// Per-request timeout for upstream fetches (`POKEARENA_TIMEOUT_SECS`).
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            upstream_base: DEFAULT_UPSTREAM_BASE.to_string(),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr =
            env::var("POKEARENA_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let upstream_base = env::var("POKEARENA_UPSTREAM")
            .map(|base| ensure_trailing_slash(&base))
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE.to_string());
        let cors_origin =
            env::var("POKEARENA_CORS_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());
        let request_timeout = env::var("POKEARENA_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Self {
            bind_addr,
            upstream_base,
            cors_origin,
            request_timeout,
        }
    }
}

fn ensure_trailing_slash(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}
