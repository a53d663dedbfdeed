//! Showcase configuration.
//!
//! Values are read from environment variables, with an optional `.env` file.
//! Every variable is optional and falls back to the classic demo data.

use std::env;
use std::str::FromStr;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => {
                write!(formatter, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Showcase configuration.
///
/// - `values`: integers added to the container, in order
/// - `remove`: a value expected to be present, removed after the first listing
/// - `missing`: a value expected to be absent, whose removal must fail
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowcaseConfig {
    /// Integers added to the demo container, in insertion order.
    pub values: Vec<i32>,
    /// Value removed after the first listing.
    pub remove: i32,
    /// Value whose removal demonstrates the not-found error.
    pub missing: i32,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            values: vec![7, 15, 6, 1, 2],
            remove: 6,
            missing: 42,
        }
    }
}

impl ShowcaseConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SHOWCASE_VALUES`: comma-separated integers (optional, default: "7,15,6,1,2")
    /// - `SHOWCASE_REMOVE`: value to remove (optional, default: 6)
    /// - `SHOWCASE_MISSING`: absent value to try removing (optional, default: 42)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let values = match lookup("SHOWCASE_VALUES") {
            Some(raw) => parse_values("SHOWCASE_VALUES", &raw)?,
            None => defaults.values,
        };
        let remove = parse_optional(&lookup, "SHOWCASE_REMOVE", defaults.remove)?;
        let missing = parse_optional(&lookup, "SHOWCASE_MISSING", defaults.missing)?;
        Ok(Self {
            values,
            remove,
            missing,
        })
    }
}

fn parse_values(key: &str, raw: &str) -> Result<Vec<i32>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse().map_err(|error| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{item:?}: {error}"),
            })
        })
        .collect()
}

fn parse_optional<F, V>(lookup: &F, key: &str, default: V) -> Result<V, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    V: FromStr,
    V::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|error: V::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })
    })
}
