//! Configuration handling for the application.
//!
//! Everything the process needs is read from the environment exactly once, in
//! `Config::from_env`, and the resulting struct is passed to the components
//! that need it. A missing or malformed required variable aborts startup;
//! nothing in the rest of the codebase touches the environment.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Keeping them public lets other crates (tests,
/// build scripts) refer to them if needed later.
pub const ENV_BOT_TOKEN: &str = "BOT_TOKEN";
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_EXTRACTOR_API_URL: &str = "EXTRACTOR_API_URL";
pub const ENV_EXTRACTOR_API_KEY: &str = "EXTRACTOR_API_KEY";
pub const ENV_EXTRACTOR_API_HOST: &str = "EXTRACTOR_API_HOST";
pub const ENV_PLATFORMS: &str = "PLATFORMS";
pub const ENV_PORT: &str = "PORT";

const DEFAULT_PORT: u16 = 3000;

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bot_token: String,
    database_url: String,
    extractor_api_url: String,
    extractor_api_key: String,
    extractor_api_host: String,
    platforms_json: String,
    port: u16,
}

impl Config {
    /// Create a new config explicitly (used by tests and embedding callers).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        bot_token: impl Into<String>,
        database_url: impl Into<String>,
        extractor_api_url: impl Into<String>,
        extractor_api_key: impl Into<String>,
        extractor_api_host: impl Into<String>,
        platforms_json: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            bot_token: bot_token.into(),
            database_url: database_url.into(),
            extractor_api_url: extractor_api_url.into(),
            extractor_api_key: extractor_api_key.into(),
            extractor_api_host: extractor_api_host.into(),
            platforms_json: platforms_json.into(),
            port,
        }
    }

    /// Load from environment variables.
    ///
    /// All variables except `PORT` are required; absence is a startup error,
    /// not something to paper over with defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var(ENV_PORT) {
            Ok(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                field: ENV_PORT,
                reason: e.to_string(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            bot_token: require(ENV_BOT_TOKEN)?,
            database_url: require(ENV_DATABASE_URL)?,
            extractor_api_url: require(ENV_EXTRACTOR_API_URL)?,
            extractor_api_key: require(ENV_EXTRACTOR_API_KEY)?,
            extractor_api_host: require(ENV_EXTRACTOR_API_HOST)?,
            platforms_json: require(ENV_PLATFORMS)?,
            port,
        })
    }

    /// Telegram bot API token.
    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }
    /// Database connection string (PostgreSQL URL).
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
    /// Extraction API endpoint the bot POSTs candidate URLs to.
    pub fn extractor_api_url(&self) -> &str {
        &self.extractor_api_url
    }
    /// API key header value for the extraction API.
    pub fn extractor_api_key(&self) -> &str {
        &self.extractor_api_key
    }
    /// API host header value for the extraction API.
    pub fn extractor_api_host(&self) -> &str {
        &self.extractor_api_host
    }
    /// JSON-encoded platform rule list, parsed by `platforms::PlatformDirectory`.
    pub fn platforms_json(&self) -> &str {
        &self.platforms_json
    }
    /// TCP port for the HTTP liveness endpoint.
    pub fn port(&self) -> u16 {
        self.port
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing { field: name })
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    Missing { field: &'static str },
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing { field } => {
                write!(f, "missing required environment variable '{}'", field)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
