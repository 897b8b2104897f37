// ABOUTME: Runtime configuration assembled from environment variables
// ABOUTME: Validates ports and timeouts up front so startup fails fast

use std::num::ParseIntError;
use std::time::Duration;

use thiserror::Error;

use folio_config::constants::*;
use folio_core::DEFAULT_PORTFOLIO_MARKER;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid HTTP timeout (expected whole seconds > 0): {0}")]
    InvalidTimeout(String),
    #[error("{0} must be set")]
    MissingVariable(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub database_url: String,
    pub github_token: Option<String>,
    pub github_api_url: String,
    pub portfolio_marker: String,
    pub openai_api_key: Option<String>,
    pub openai_model: Option<String>,
    pub openai_base_url: String,
    pub admin_emails: String,
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    pub site_url: Option<String>,
    /// Outbound request timeout; unset means requests may wait indefinitely
    pub http_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(folio_config::env_var)
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let get_or = |name: &str, default: &str| get(name).unwrap_or_else(|| default.to_string());

        let port = match get(PORT) {
            Some(raw) => raw.parse::<u16>()?,
            None => DEFAULT_PORT,
        };
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let http_timeout = match get(FOLIO_HTTP_TIMEOUT_SECS) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => None,
        };

        Ok(Config {
            port,
            cors_origin: get_or(CORS_ORIGIN, DEFAULT_CORS_ORIGIN),
            database_url: get_or(DATABASE_URL, DEFAULT_DATABASE_URL),
            github_token: get(GITHUB_TOKEN),
            github_api_url: get_or(GITHUB_API_URL, DEFAULT_GITHUB_API_URL),
            portfolio_marker: get_or(PORTFOLIO_MARKER, DEFAULT_PORTFOLIO_MARKER),
            openai_api_key: get(OPENAI_API_KEY),
            openai_model: get(OPENAI_MODEL),
            openai_base_url: get_or(OPENAI_BASE_URL, DEFAULT_OPENAI_BASE_URL),
            admin_emails: get(ADMIN_EMAILS).unwrap_or_default(),
            supabase_url: get(SUPABASE_URL),
            supabase_anon_key: get(SUPABASE_ANON_KEY),
            site_url: get(SITE_URL),
            http_timeout,
        })
    }

    /// The GitHub token, required by anything that lists repositories
    pub fn require_github_token(&self) -> Result<&str, ConfigError> {
        self.github_token
            .as_deref()
            .ok_or(ConfigError::MissingVariable(GITHUB_TOKEN))
    }
}
