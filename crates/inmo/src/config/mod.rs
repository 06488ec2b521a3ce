use std::env;
use std::fmt;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Distinguishes runtime behavior for different stages of the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the client.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub api: ApiConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let base_url = env::var("API_URL")
            .or_else(|_| env::var("NEXT_PUBLIC_API_URL"))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs = env::var("API_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            api: ApiConfig::new(base_url, Duration::from_secs(timeout_secs))?,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the REST backend lives and how long a single call may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
        let has_host = trimmed
            .split_once("://")
            .map(|(_, rest)| !rest.is_empty())
            .unwrap_or(false);
        if !has_scheme || !has_host {
            return Err(ConfigError::InvalidApiUrl { value: base_url });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve an `/api/...` path against the configured backend.
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim();
        let mut joined = String::with_capacity(self.base_url.len() + path.len() + 1);
        joined.push_str(&self.base_url);
        joined.push('/');

        let mut previous_slash = true;
        for ch in path.chars() {
            if ch == '/' && previous_slash {
                continue;
            }
            previous_slash = ch == '/';
            joined.push(ch);
        }
        joined
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTimeout,
    InvalidApiUrl { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTimeout => write!(f, "API_TIMEOUT_SECS must be a valid u64"),
            ConfigError::InvalidApiUrl { value } => {
                write!(f, "API_URL '{value}' must be an absolute http(s) URL")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("API_URL");
        env::remove_var("NEXT_PUBLIC_API_URL");
        env::remove_var("API_TIMEOUT_SECS");
        env::remove_var("APP_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.api.base_url(), "http://localhost:8080");
        assert_eq!(config.api.timeout, Duration::from_secs(30));
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn falls_back_to_public_api_url() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("NEXT_PUBLIC_API_URL", "https://api.inmo.test/");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.api.base_url(), "https://api.inmo.test");
        env::set_var("API_URL", "http://127.0.0.1:9000");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.api.base_url(), "http://127.0.0.1:9000");
        reset_env();
    }

    #[test]
    fn rejects_invalid_timeout() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("API_TIMEOUT_SECS", "soon");
        assert!(matches!(AppConfig::load(), Err(ConfigError::InvalidTimeout)));
        reset_env();
    }

    #[test]
    fn rejects_relative_base_url() {
        let err = ApiConfig::new("/api", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidApiUrl { .. }));
    }

    #[test]
    fn endpoint_collapses_duplicate_slashes() {
        let config = ApiConfig::new("http://h/", Duration::from_secs(1)).expect("valid url");
        assert_eq!(config.endpoint("/api/cities"), "http://h/api/cities");
        assert_eq!(config.endpoint("api//cities/3"), "http://h/api/cities/3");
    }
}
