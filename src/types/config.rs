use crate::error::MonitorError;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_BACKOFF_BASE_MS: u64 = 300;
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 10_000;
pub const DEFAULT_MAX_RATE_LIMIT_WAIT_SECS: u64 = 60;
pub const DEFAULT_OUTPUT_FILE: &str = "repo_health_report.json";

// Upper bounds keep every wait representable as an `Instant` deadline.
pub const MAX_TIMEOUT_SECS: u64 = 3_600;
pub const MAX_RATE_LIMIT_WAIT_SECS: u64 = 3_600;
pub const MAX_BACKOFF_MS_LIMIT: u64 = 3_600_000;

/// On-disk configuration; every field is optional so layers can be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorConfig {
    pub api: Option<ApiConfig>,
    pub fetch: Option<FetchSettings>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchSettings {
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
    pub backoff_base_ms: Option<u64>,
    pub max_backoff_ms: Option<u64>,
    pub max_rate_limit_wait_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub file: Option<String>,
}

/// Resolved settings handed to the fetch client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub backoff_base: Duration,
    pub max_backoff: Duration,
    pub max_rate_limit_wait: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: default_user_agent(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base: Duration::from_millis(DEFAULT_BACKOFF_BASE_MS),
            max_backoff: Duration::from_millis(DEFAULT_MAX_BACKOFF_MS),
            max_rate_limit_wait: Duration::from_secs(DEFAULT_MAX_RATE_LIMIT_WAIT_SECS),
        }
    }
}

pub fn default_user_agent() -> String {
    format!("repohealth/{}", env!("CARGO_PKG_VERSION"))
}

impl MonitorConfig {
    pub fn fetch_config(&self) -> FetchConfig {
        let defaults = FetchConfig::default();
        let api = self.api.clone().unwrap_or_default();
        let fetch = self.fetch.clone().unwrap_or_default();
        FetchConfig {
            base_url: api.base_url.unwrap_or(defaults.base_url),
            user_agent: api.user_agent.unwrap_or(defaults.user_agent),
            timeout: fetch
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            max_retries: fetch.max_retries.unwrap_or(defaults.max_retries),
            backoff_base: fetch
                .backoff_base_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.backoff_base),
            max_backoff: fetch
                .max_backoff_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.max_backoff),
            max_rate_limit_wait: fetch
                .max_rate_limit_wait_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.max_rate_limit_wait),
        }
    }

    pub fn output_file(&self) -> String {
        self.output
            .as_ref()
            .and_then(|output| output.file.clone())
            .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string())
    }

    pub fn validate(&self) -> Result<(), MonitorError> {
        if let Some(api) = &self.api {
            if let Some(base_url) = &api.base_url {
                if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                    return Err(MonitorError::ConfigParse(format!(
                        "api.base_url must be an http(s) URL (found {base_url})"
                    )));
                }
            }
            if api
                .user_agent
                .as_ref()
                .is_some_and(|agent| agent.trim().is_empty())
            {
                return Err(MonitorError::ConfigParse(
                    "api.user_agent must be non-empty".to_string(),
                ));
            }
        }

        if let Some(fetch) = &self.fetch {
            if let Some(timeout) = fetch.timeout_secs {
                if timeout == 0 || timeout > MAX_TIMEOUT_SECS {
                    return Err(MonitorError::ConfigParse(format!(
                        "fetch.timeout_secs must be between 1 and {MAX_TIMEOUT_SECS} (found {timeout})"
                    )));
                }
            }
            if let Some(wait) = fetch.max_rate_limit_wait_secs {
                if wait > MAX_RATE_LIMIT_WAIT_SECS {
                    return Err(MonitorError::ConfigParse(format!(
                        "fetch.max_rate_limit_wait_secs must be at most {MAX_RATE_LIMIT_WAIT_SECS} (found {wait})"
                    )));
                }
            }
            for (key, value) in [
                ("fetch.backoff_base_ms", fetch.backoff_base_ms),
                ("fetch.max_backoff_ms", fetch.max_backoff_ms),
            ] {
                if value.is_some_and(|ms| ms > MAX_BACKOFF_MS_LIMIT) {
                    return Err(MonitorError::ConfigParse(format!(
                        "{key} must be at most {MAX_BACKOFF_MS_LIMIT}"
                    )));
                }
            }
            if let (Some(base), Some(max)) = (fetch.backoff_base_ms, fetch.max_backoff_ms) {
                if base > max {
                    return Err(MonitorError::ConfigParse(format!(
                        "fetch.backoff_base_ms ({base}) exceeds fetch.max_backoff_ms ({max})"
                    )));
                }
            }
        }

        if self
            .output
            .as_ref()
            .and_then(|output| output.file.as_ref())
            .is_some_and(|file| file.trim().is_empty())
        {
            return Err(MonitorError::ConfigParse(
                "output.file must be non-empty".to_string(),
            ));
        }

        Ok(())
    }
}
