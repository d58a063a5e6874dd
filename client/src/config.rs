//! Admin API configuration resolved at build time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://photography-portfolio-gk9f.onrender.com";

/// Where the admin REST API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build from `PORTFOLIO_API_BASE_URL` captured at compile time.
    ///
    /// WASM bundles have no process environment, so the override has to be
    /// baked in when the client is built.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("PORTFOLIO_API_BASE_URL"))
    }

    fn from_raw(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_raw(None)
    }
}
