//! # Environment Variables
//!
//! Reading and parsing process configuration from the environment.

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Get a required environment variable.
pub fn get_env(name: &'static str) -> Result<String, EnvError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(EnvError::Missing(name)),
    }
}

/// Get an environment variable, falling back to `default` when unset or blank.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    get_env(name).unwrap_or_else(|_| default.to_string())
}

/// Get and parse an environment variable, falling back to `default` when unset.
///
/// A value that is present but does not parse is an error rather than a silent
/// fallback.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, EnvError> {
    match get_env(name) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| EnvError::WrongFormat(name)),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    #[error("{0} must be set in environment")]
    Missing(&'static str),
    #[error("{0} has an invalid format")]
    WrongFormat(&'static str),
}
