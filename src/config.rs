use serde::Deserialize;
use std::str::FromStr;

use crate::domain::errors::ConfigurationError;
use crate::domain::logging::LogLevel;

pub const BACKEND_URL_VAR: &str = "IRON_CAPITAL_BACKEND_URL";
pub const ANON_KEY_VAR: &str = "IRON_CAPITAL_ANON_KEY";
pub const LOG_LEVEL_VAR: &str = "IRON_CAPITAL_LOG_LEVEL";

pub const DEFAULT_SEARCH_LATENCY_MS: u32 = 500;
pub const DEFAULT_SESSION_KEY: &str = "iron-capital.session";

/// Runtime settings for the hosted backend and the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    pub anon_key: String,
    pub log_level: LogLevel,
    /// Simulated lookup latency of the company search; 0 disables it
    pub search_latency_ms: u32,
    pub session_storage_key: String,
}

/// JSON shape accepted by [`AppConfig::from_json`]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    backend_url: Option<String>,
    anon_key: Option<String>,
    log_level: Option<String>,
    search_latency_ms: Option<u32>,
    session_storage_key: Option<String>,
}

impl AppConfig {
    /// Read settings baked in at compile time
    pub fn from_build_env() -> Result<Self, ConfigurationError> {
        Self::from_values(
            option_env!("IRON_CAPITAL_BACKEND_URL"),
            option_env!("IRON_CAPITAL_ANON_KEY"),
            option_env!("IRON_CAPITAL_LOG_LEVEL"),
        )
    }

    pub fn from_values(
        backend_url: Option<&str>,
        anon_key: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigurationError> {
        let backend_url = backend_url.map(str::trim).filter(|value| !value.is_empty());
        let anon_key = anon_key.map(str::trim).filter(|value| !value.is_empty());

        let (Some(backend_url), Some(anon_key)) = (backend_url, anon_key) else {
            return Err(ConfigurationError::MissingConfiguration(format!(
                "set {} and {} to reach the backend",
                BACKEND_URL_VAR, ANON_KEY_VAR
            )));
        };

        if !(backend_url.starts_with("https://") || backend_url.starts_with("http://")) {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{} must be an http(s) URL, got {}",
                BACKEND_URL_VAR, backend_url
            )));
        }

        let log_level = match log_level.map(str::trim).filter(|value| !value.is_empty()) {
            Some(level) => LogLevel::from_str(level).map_err(|_| {
                ConfigurationError::InvalidParameter(format!("{}: unknown level {}", LOG_LEVEL_VAR, level))
            })?,
            None => LogLevel::Info,
        };

        Ok(Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            log_level,
            search_latency_ms: DEFAULT_SEARCH_LATENCY_MS,
            session_storage_key: DEFAULT_SESSION_KEY.to_string(),
        })
    }

    /// Parse a JSON settings object, e.g. one injected by the hosting page
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let raw: RawConfig = serde_json::from_str(json)
            .map_err(|e| ConfigurationError::InvalidParameter(format!("config JSON: {}", e)))?;
        let mut config = Self::from_values(
            raw.backend_url.as_deref(),
            raw.anon_key.as_deref(),
            raw.log_level.as_deref(),
        )?;
        if let Some(latency) = raw.search_latency_ms {
            config.search_latency_ms = latency;
        }
        if let Some(key) = raw.session_storage_key.filter(|key| !key.trim().is_empty()) {
            config.session_storage_key = key;
        }
        Ok(config)
    }

    pub fn with_search_latency_ms(mut self, latency_ms: u32) -> Self {
        self.search_latency_ms = latency_ms;
        self
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.backend_url, path.trim_start_matches('/'))
    }

    pub fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{}", self.backend_url, path.trim_start_matches('/'))
    }
}
