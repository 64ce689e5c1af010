//! Typed Environment Configuration
//!
//! Both services read flat `KEY=value` settings. Lookups go through
//! [`EnvSource`] so configuration parsing can be tested without touching the
//! process environment.

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

/// Configuration loading error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        name: String,
        value: String,
        reason: String,
    },
}

/// Source of raw configuration values
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Typed accessors over an [`EnvSource`]
pub struct Settings<'a, S: EnvSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: EnvSource + ?Sized> Settings<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Non-empty value or [`ConfigError::Missing`]
    pub fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.source
            .var(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::Missing(name.to_string()))
    }

    /// Value if set and non-empty
    pub fn optional(&self, name: &str) -> Option<String> {
        self.source
            .var(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn string_or(&self, name: &str, default: &str) -> String {
        self.optional(name).unwrap_or_else(|| default.to_string())
    }

    /// Parse with [`FromStr`], falling back to `default` when unset
    pub fn parse_or<T>(&self, name: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.optional(name) {
            None => Ok(default),
            Some(raw) => raw.parse::<T>().map_err(|e| ConfigError::Invalid {
                name: name.to_string(),
                value: raw,
                reason: e.to_string(),
            }),
        }
    }

    /// Boolean flag: `true/false`, `1/0`, `yes/no` (case-insensitive)
    pub fn flag_or(&self, name: &str, default: bool) -> Result<bool, ConfigError> {
        match self.optional(name) {
            None => Ok(default),
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::Invalid {
                    name: name.to_string(),
                    value: raw,
                    reason: "expected a boolean".to_string(),
                }),
            },
        }
    }
}
