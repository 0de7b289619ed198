//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (loaded by `main.rs`).
//!
//! ```bash
//! export BASE_URL="https://s.example.com"
//! export DATABASE_URL="sqlite://data.db"
//! ```
//!
//! ## Optional Variables
//!
//! - `BASE_URL` - Prefix for generated short URLs (default: `http://127.0.0.1:5023`)
//! - `DATABASE_URL` - SQLite database, created if absent (default: `sqlite://data.db`)
//! - `LISTEN` - Bind address (default: `127.0.0.1:5023`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)
//! - `DB_BUSY_TIMEOUT` - SQLite busy timeout in seconds (default: 5)

use anyhow::Result;
use std::env;

use crate::utils::url_validator::validate_url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5023";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data.db";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5023";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
    /// How long a writer waits on a locked database in seconds
    /// (`DB_BUSY_TIMEOUT`, default: 5).
    pub db_busy_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 5,
            db_connect_timeout: 30,
            db_busy_timeout: 5,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_url: env::var("BASE_URL").unwrap_or(defaults.base_url),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS")
                .unwrap_or(defaults.db_max_connections),
            db_connect_timeout: parse_var("DB_CONNECT_TIMEOUT")
                .unwrap_or(defaults.db_connect_timeout),
            db_busy_timeout: parse_var("DB_BUSY_TIMEOUT").unwrap_or(defaults.db_busy_timeout),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` is not an http(s) URL
    /// - `database_url` is not a SQLite URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if let Err(e) = validate_url(&self.base_url) {
            anyhow::bail!("BASE_URL must be an http(s) URL, got '{}': {}", self.base_url, e);
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Pool size: {}", self.db_max_connections);
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "BASE_URL",
        "DATABASE_URL",
        "LISTEN",
        "LOG_FORMAT",
        "DB_MAX_CONNECTIONS",
        "DB_CONNECT_TIMEOUT",
        "DB_BUSY_TIMEOUT",
    ];

    fn clear_vars() {
        // SAFETY: Tests touching the environment are run serially via #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5023");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
        config.base_url = "https://s.example.com".to_string();
        assert!(config.validate().is_ok());

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());
        config.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "5023".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:5023".to_string();

        config.db_max_connections = 0;
        assert!(config.validate().is_err());
        config.db_max_connections = 1;

        config.db_connect_timeout = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_vars();

        let config = Config::from_env();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.db_max_connections, 5);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_vars();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("BASE_URL", "https://s.example.com");
            env::set_var("DB_MAX_CONNECTIONS", "12");
            env::set_var("DB_BUSY_TIMEOUT", "not-a-number");
        }

        let config = Config::from_env();
        assert_eq!(config.base_url, "https://s.example.com");
        assert_eq!(config.db_max_connections, 12);
        assert_eq!(config.db_busy_timeout, 5);

        clear_vars();
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_invalid() {
        clear_vars();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "yaml");
        }

        assert!(load_from_env().is_err());

        clear_vars();
    }
}
