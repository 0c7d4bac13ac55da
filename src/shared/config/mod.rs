//! Application configuration module
//!
//! Settings are read once at startup from the process environment (after
//! `.env` has been loaded by the binary) and shared immutably afterwards.

use thiserror::Error;

/// Default signing secret. Only suitable for local development.
pub const DEFAULT_SECRET_KEY: &str = "your-secret-key";

/// Default token lifetime: one week.
pub const DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 60 * 24 * 7;

/// Same value as `bcrypt::DEFAULT_COST`; `shared` builds without the
/// `ssr` feature, so the constant cannot be referenced here.
pub const DEFAULT_BCRYPT_COST: u32 = 12;

const SUPPORTED_ALGORITHMS: &[&str] = &["HS256", "HS384", "HS512"];

/// Application settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// sqlx connection string for the SQLite database
    pub database_url: String,
    /// HMAC secret used to sign and verify access tokens
    pub secret_key: String,
    /// JWT algorithm name (HMAC family only)
    pub algorithm: String,
    /// Access token lifetime in minutes
    pub access_token_expire_minutes: i64,
    /// Prefix every API route is mounted under
    pub api_prefix: String,
    /// CORS origins; empty means any origin without credentials
    pub allowed_hosts: Vec<String>,
    /// TCP port the server binds to
    pub server_port: u16,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    /// Logging configuration
    pub log: LogSettings,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Console level used when `RUST_LOG` is not set
    pub level: String,
    /// File receiving DEBUG-level output; `None` disables the file layer
    pub path: Option<String>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            path: Some("./server.log".to_string()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: "sqlite://trip.db".to_string(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            algorithm: "HS256".to_string(),
            access_token_expire_minutes: DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
            api_prefix: "/v1".to_string(),
            allowed_hosts: Vec::new(),
            server_port: 8000,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            log: LogSettings::default(),
        }
    }
}

impl Settings {
    /// Create a new SettingsBuilder
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Load settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup
    ///
    /// Unset or empty variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut builder = Settings::builder();

        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = get("SECRET_KEY") {
            builder = builder.secret_key(secret);
        }
        if let Some(algorithm) = get("ALGORITHM") {
            builder = builder.algorithm(algorithm);
        }
        if let Some(minutes) = get("ACCESS_TOKEN_EXPIRE_MINUTES") {
            let minutes = parse_number("ACCESS_TOKEN_EXPIRE_MINUTES", &minutes)?;
            builder = builder.access_token_expire_minutes(minutes);
        }
        if let Some(prefix) = get("API_V1_STR") {
            builder = builder.api_prefix(prefix);
        }
        if let Some(hosts) = get("ALLOWED_HOSTS") {
            builder = builder.allowed_hosts(
                hosts
                    .split(',')
                    .map(str::trim)
                    .filter(|h| !h.is_empty())
                    .map(str::to_string)
                    .collect(),
            );
        }
        if let Some(port) = get("SERVER_PORT") {
            builder = builder.server_port(parse_number("SERVER_PORT", &port)?);
        }
        if let Some(cost) = get("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_number("BCRYPT_COST", &cost)?);
        }
        if let Some(level) = get("LOG_LEVEL") {
            builder = builder.log_level(level);
        }
        // An explicitly empty LOG_PATH turns file logging off.
        match lookup("LOG_PATH") {
            Some(path) if path.trim().is_empty() => builder = builder.log_path(None),
            Some(path) => builder = builder.log_path(Some(path)),
            None => {}
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SUPPORTED_ALGORITHMS.contains(&self.algorithm.as_str()) {
            return Err(ConfigError::UnsupportedAlgorithm(self.algorithm.clone()));
        }
        if self.secret_key.is_empty() {
            return Err(ConfigError::MissingValue("SECRET_KEY"));
        }
        if self.access_token_expire_minutes <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "ACCESS_TOKEN_EXPIRE_MINUTES",
                value: self.access_token_expire_minutes.to_string(),
            });
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if !self.api_prefix.is_empty() && !self.api_prefix.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                key: "API_V1_STR",
                value: self.api_prefix.clone(),
            });
        }
        Ok(())
    }

    /// Whether the signing secret is still the development default
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Builder for Settings
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    database_url: Option<String>,
    secret_key: Option<String>,
    algorithm: Option<String>,
    access_token_expire_minutes: Option<i64>,
    api_prefix: Option<String>,
    allowed_hosts: Option<Vec<String>>,
    server_port: Option<u16>,
    bcrypt_cost: Option<u32>,
    log_level: Option<String>,
    log_path: Option<Option<String>>,
}

impl SettingsBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn secret_key(mut self, secret: impl Into<String>) -> Self {
        self.secret_key = Some(secret.into());
        self
    }

    /// Set the token algorithm
    pub fn algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into().to_uppercase());
        self
    }

    pub fn access_token_expire_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expire_minutes = Some(minutes);
        self
    }

    pub fn api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = Some(prefix.into());
        self
    }

    pub fn allowed_hosts(mut self, hosts: Vec<String>) -> Self {
        self.allowed_hosts = Some(hosts);
        self
    }

    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn log_path(mut self, path: Option<String>) -> Self {
        self.log_path = Some(path);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<Settings, ConfigError> {
        let defaults = Settings::default();
        let settings = Settings {
            database_url: self.database_url.unwrap_or(defaults.database_url),
            secret_key: self.secret_key.unwrap_or(defaults.secret_key),
            algorithm: self.algorithm.unwrap_or(defaults.algorithm),
            access_token_expire_minutes: self
                .access_token_expire_minutes
                .unwrap_or(defaults.access_token_expire_minutes),
            api_prefix: self.api_prefix.unwrap_or(defaults.api_prefix),
            allowed_hosts: self.allowed_hosts.unwrap_or(defaults.allowed_hosts),
            server_port: self.server_port.unwrap_or(defaults.server_port),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(defaults.bcrypt_cost),
            log: LogSettings {
                level: self.log_level.unwrap_or(defaults.log.level),
                path: self.log_path.unwrap_or(defaults.log.path),
            },
        };
        settings.validate()?;
        Ok(settings)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("unsupported token algorithm: {0} (expected HS256, HS384 or HS512)")]
    UnsupportedAlgorithm(String),
}
