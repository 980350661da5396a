//! Runtime configuration.
//!
//! Values come from compile-time environment (`option_env!`, which also works
//! for WASM bundles) and, on native targets, from the process environment at
//! startup. Unparseable values are logged and ignored.

use std::time::Duration;

use api::DEFAULT_ANALYSIS_ENDPOINT;
use tracing::warn;

pub const ANALYSIS_URL_VAR: &str = "FARMSMART_ANALYSIS_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "FARMSMART_REQUEST_TIMEOUT_MS";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub analysis_endpoint: String,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis_endpoint: DEFAULT_ANALYSIS_ENDPOINT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let built = Self::default().with_overrides(
            option_env!("FARMSMART_ANALYSIS_URL"),
            option_env!("FARMSMART_REQUEST_TIMEOUT_MS"),
        );

        #[cfg(not(target_arch = "wasm32"))]
        let built = {
            let url = std::env::var(ANALYSIS_URL_VAR).ok();
            let timeout = std::env::var(REQUEST_TIMEOUT_VAR).ok();
            built.with_overrides(url.as_deref(), timeout.as_deref())
        };

        built
    }

    /// Apply raw overrides. Blank or invalid values keep the current setting.
    pub fn with_overrides(mut self, endpoint: Option<&str>, timeout_ms: Option<&str>) -> Self {
        if let Some(url) = endpoint.map(str::trim).filter(|url| !url.is_empty()) {
            self.analysis_endpoint = url.to_string();
        }

        if let Some(raw) = timeout_ms.map(str::trim).filter(|raw| !raw.is_empty()) {
            match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => self.request_timeout = Duration::from_millis(ms),
                _ => warn!(value = raw, "ignoring invalid {REQUEST_TIMEOUT_VAR}"),
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_endpoint() {
        let config = AppConfig::default();
        assert_eq!(
            config.analysis_endpoint,
            "http://localhost:3000/api/analyze-field"
        );
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn overrides_apply_when_valid() {
        let config = AppConfig::default()
            .with_overrides(Some(" https://api.farmsmart.ai/analyze "), Some("5000"));
        assert_eq!(config.analysis_endpoint, "https://api.farmsmart.ai/analyze");
        assert_eq!(config.request_timeout, Duration::from_millis(5000));
    }

    #[test]
    fn invalid_overrides_are_ignored() {
        let config = AppConfig::default().with_overrides(Some("   "), Some("soon"));
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::default().with_overrides(None, Some("0"));
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }
}
