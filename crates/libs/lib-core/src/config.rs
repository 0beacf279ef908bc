//! # Application Configuration
//!
//! Configuration loaded from environment variables and validated on startup
//! so a misconfigured server fails fast.
//!
//! The validated [`Config`] is carried in the router state; there is no global
//! instance.
//!
//! ```rust,no_run
//! use lib_core::Config;
//!
//! let config = Config::from_env().expect("invalid configuration");
//! println!("listening on {}", config.bind_address);
//! ```

use chrono::Duration;
use lib_utils::{get_env, get_env_or, get_env_parse_or, EnvError};

use crate::error::{AppError, Result};

pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/quickgpt.db";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 30;
pub const DEFAULT_INITIAL_CREDITS: i64 = 20;
pub const MIN_JWT_SECRET_LEN: usize = 32;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// SQLite database connection URL
    pub database_url: String,

    /// Secret key for token signing and verification
    ///
    /// **Must be at least 32 characters long.**
    pub jwt_secret: String,

    /// Token validity period in days (1-365)
    pub token_ttl_days: i64,

    /// Credit balance granted on registration
    pub initial_credits: i64,

    /// Socket address the server binds to
    pub bind_address: String,

    /// Origins allowed by CORS; empty allows any origin
    pub allowed_origins: Vec<String>,

    /// `tracing` filter directive
    pub log_level: String,
}

impl Config {
    /// Configuration with defaults for everything but the database and secret.
    pub fn new(database_url: impl Into<String>, jwt_secret: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            jwt_secret: jwt_secret.into(),
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
            initial_credits: DEFAULT_INITIAL_CREDITS,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            allowed_origins: Vec::new(),
            log_level: "info".to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `BIND_ADDRESS` wins over `PORT`; a bare `PORT` binds all interfaces.
    pub fn from_env() -> Result<Self> {
        let jwt_secret = get_env("JWT_SECRET").map_err(config_err)?;
        let database_url = get_env_or("DATABASE_URL", DEFAULT_DATABASE_URL);

        let token_ttl_days =
            get_env_parse_or("TOKEN_TTL_DAYS", DEFAULT_TOKEN_TTL_DAYS).map_err(config_err)?;
        let initial_credits =
            get_env_parse_or("INITIAL_CREDITS", DEFAULT_INITIAL_CREDITS).map_err(config_err)?;

        let bind_address = match (get_env("BIND_ADDRESS"), get_env("PORT")) {
            (Ok(addr), _) => addr,
            (Err(_), Ok(port)) => format!("0.0.0.0:{}", port.trim()),
            (Err(_), Err(_)) => DEFAULT_BIND_ADDRESS.to_string(),
        };

        let allowed_origins = get_env_or("ALLOWED_ORIGINS", "")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let config = Self {
            database_url,
            jwt_secret,
            token_ttl_days,
            initial_credits,
            bind_address,
            allowed_origins,
            log_level: get_env_or("LOG_LEVEL", "info"),
        };
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(AppError::Config(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LEN
            )));
        }

        if !(1..=365).contains(&self.token_ttl_days) {
            return Err(AppError::Config(
                "TOKEN_TTL_DAYS must be between 1 and 365".to_string(),
            ));
        }

        if self.initial_credits < 0 {
            return Err(AppError::Config("INITIAL_CREDITS cannot be negative".to_string()));
        }

        Ok(())
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::days(self.token_ttl_days)
    }
}

fn config_err(err: EnvError) -> AppError {
    AppError::Config(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-must-be-at-least-32-chars-long!";

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::new("sqlite::memory:", SECRET);
        assert!(config.validate().is_ok());
        assert_eq!(config.token_ttl(), Duration::days(30));
        assert_eq!(config.initial_credits, 20);
    }

    #[test]
    fn test_short_secret_rejected() {
        let config = Config::new("sqlite::memory:", "short");
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_ttl_range() {
        let mut config = Config::new("sqlite::memory:", SECRET);
        config.token_ttl_days = 0;
        assert!(config.validate().is_err());
        config.token_ttl_days = 366;
        assert!(config.validate().is_err());
        config.token_ttl_days = 365;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_errors_become_config_errors() {
        let err = config_err(lib_utils::EnvError::Missing("JWT_SECRET"));
        match err {
            AppError::Config(msg) => assert_eq!(msg, "JWT_SECRET must be set in environment"),
            other => panic!("expected config error, got {other:?}"),
        }

        let err = config_err(lib_utils::EnvError::WrongFormat("TOKEN_TTL_DAYS"));
        assert!(matches!(err, AppError::Config(msg) if msg.contains("TOKEN_TTL_DAYS")));
    }
}
