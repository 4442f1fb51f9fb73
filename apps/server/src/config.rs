//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::services::query_cache::CacheSettings;

/// Development default values - NEVER use in production.
pub mod defaults {
    pub const DEV_PADDLES_URL: &str = "http://localhost:8080";
    pub const DEV_HOST: &str = "127.0.0.1";
    pub const DEV_PORT: u16 = 8081;
    pub const FETCH_TIMEOUT_MS: u64 = 1000;
    pub const CACHE_STALE_SECS: u64 = 300; // 5 minutes
    pub const CACHE_EVICT_SECS: u64 = 900;
    pub const CACHE_SWEEP_SECS: u64 = 60;
    pub const DEFAULT_PAGE_SIZE: u32 = 25;
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse environment from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    /// Check if this is a development environment.
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment
    pub environment: Environment,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Base URL of the Paddles results service
    pub paddles_url: String,
    /// Per-request timeout for Paddles fetches
    pub fetch_timeout: Duration,
    /// Query cache expiry policy
    pub cache: CacheSettings,
    /// How often expired cache entries are swept
    pub cache_sweep_interval: Duration,
    /// Page size used when the URL carries none
    pub default_page_size: u32,
    /// Directory for static frontend assets (production only)
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RUST_ENV`: Environment (development/production) - REQUIRED
    /// - `PULPITO_HOST`: Server host (default: 127.0.0.1)
    /// - `PULPITO_PORT`: Server port (default: 8081)
    /// - `PADDLES_URL`: Paddles base URL (must be set in production)
    /// - `PULPITO_FETCH_TIMEOUT_MS`: Paddles request timeout (default: 1000)
    /// - `PULPITO_CACHE_STALE_SECS`: Age before a cached response is refreshed (default: 300)
    /// - `PULPITO_CACHE_EVICT_SECS`: Age before a cached response is dropped (default: 900)
    /// - `PULPITO_CACHE_SWEEP_SECS`: Eviction sweep interval (default: 60)
    /// - `PULPITO_DEFAULT_PAGE_SIZE`: Page size when the URL has none (default: 25)
    /// - `PULPITO_STATIC_DIR`: Static assets directory for production
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_str = env::var("RUST_ENV").map_err(|_| ConfigError::MissingEnvVar("RUST_ENV"))?;

        let environment = Environment::parse(&env_str).ok_or(ConfigError::InvalidValue(
            "RUST_ENV must be 'development' or 'production'",
        ))?;

        let host = env::var("PULPITO_HOST").unwrap_or_else(|_| defaults::DEV_HOST.to_string());

        let port = env::var("PULPITO_PORT")
            .unwrap_or_else(|_| defaults::DEV_PORT.to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue("PULPITO_PORT must be a valid port number"))?;

        let paddles_url = env::var("PADDLES_URL")
            .unwrap_or_else(|_| defaults::DEV_PADDLES_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let fetch_timeout_ms = parse_u64(
            "PULPITO_FETCH_TIMEOUT_MS",
            defaults::FETCH_TIMEOUT_MS,
            "PULPITO_FETCH_TIMEOUT_MS must be a valid number",
        )?;

        let stale_secs = parse_u64(
            "PULPITO_CACHE_STALE_SECS",
            defaults::CACHE_STALE_SECS,
            "PULPITO_CACHE_STALE_SECS must be a valid number",
        )?;

        let evict_secs = parse_u64(
            "PULPITO_CACHE_EVICT_SECS",
            defaults::CACHE_EVICT_SECS,
            "PULPITO_CACHE_EVICT_SECS must be a valid number",
        )?;

        let sweep_secs = parse_u64(
            "PULPITO_CACHE_SWEEP_SECS",
            defaults::CACHE_SWEEP_SECS,
            "PULPITO_CACHE_SWEEP_SECS must be a valid number",
        )?;

        let default_page_size = env::var("PULPITO_DEFAULT_PAGE_SIZE")
            .unwrap_or_else(|_| defaults::DEFAULT_PAGE_SIZE.to_string())
            .parse::<u32>()
            .map_err(|_| {
                ConfigError::InvalidValue("PULPITO_DEFAULT_PAGE_SIZE must be a valid number")
            })?;

        let static_dir = env::var("PULPITO_STATIC_DIR").ok().map(PathBuf::from);

        let config = Config {
            environment,
            host,
            port,
            paddles_url,
            fetch_timeout: Duration::from_millis(fetch_timeout_ms),
            cache: CacheSettings {
                stale_after: Duration::from_secs(stale_secs),
                evict_after: Duration::from_secs(evict_secs),
            },
            cache_sweep_interval: Duration::from_secs(sweep_secs),
            default_page_size,
            static_dir,
        };

        config.validate()?;

        // Validate production configuration
        if environment.is_production() {
            config.validate_production()?;
        }

        Ok(config)
    }

    /// Reject settings that cannot work in any environment.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_timeout.is_zero() {
            return Err(ConfigError::InvalidValue(
                "PULPITO_FETCH_TIMEOUT_MS must be greater than zero",
            ));
        }
        if self.cache.evict_after < self.cache.stale_after {
            return Err(ConfigError::InvalidValue(
                "PULPITO_CACHE_EVICT_SECS must not be smaller than PULPITO_CACHE_STALE_SECS",
            ));
        }
        if self.cache_sweep_interval.is_zero() {
            return Err(ConfigError::InvalidValue(
                "PULPITO_CACHE_SWEEP_SECS must be greater than zero",
            ));
        }
        if self.default_page_size == 0 || self.default_page_size > crate::binder::MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidValue(
                "PULPITO_DEFAULT_PAGE_SIZE must be between 1 and 1000",
            ));
        }
        Ok(())
    }

    /// Validate that production configuration does not use development defaults.
    fn validate_production(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.paddles_url == defaults::DEV_PADDLES_URL {
            errors.push(format!(
                "PADDLES_URL is using development default '{}'. Set the production Paddles URL.",
                defaults::DEV_PADDLES_URL
            ));
        }

        if !self.paddles_url.starts_with("http://") && !self.paddles_url.starts_with("https://") {
            errors.push(format!(
                "PADDLES_URL '{}' must be an http(s) URL.",
                self.paddles_url
            ));
        }

        if !errors.is_empty() {
            return Err(ConfigError::ProductionValidation(errors));
        }

        Ok(())
    }

    /// Get the server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if running in development mode.
    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }
}

fn parse_u64(var: &str, default: u64, message: &'static str) -> Result<u64, ConfigError> {
    env::var(var)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidValue(message))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),

    #[error("Production configuration validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    ProductionValidation(Vec<String>),
}
