//! Environment Configuration
//!
//! Fail-fast loading of process configuration. Missing variables are
//! collected while reading and reported together by [`EnvReader::finish`],
//! so a misconfigured deployment shows every missing key in one error.

use std::collections::HashMap;
use std::str::FromStr;

use thiserror::Error;

use crate::secret::SecretString;

/// Name of the variable selecting the runtime environment
pub const APP_ENV: &str = "APP_ENV";

/// Configuration errors (fatal at startup)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}. Please set them.", .0.join(", "))]
    Missing(Vec<String>),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Source of configuration values
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    /// Debug builds default to development, release builds to production
    pub fn build_default() -> Self {
        if cfg!(debug_assertions) {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" => Ok(Environment::Development),
            other => Err(ConfigError::Invalid {
                key: APP_ENV.to_string(),
                reason: format!("expected 'production' or 'development', got '{other}'"),
            }),
        }
    }
}

/// Reads variables from an [`EnvSource`], remembering which are missing
pub struct EnvReader<'a, S: EnvSource + ?Sized> {
    source: &'a S,
    missing: Vec<String>,
}

impl<'a, S: EnvSource + ?Sized> EnvReader<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            missing: Vec::new(),
        }
    }

    /// Value of `key` exactly as set, unless blank
    fn raw(&self, key: &str) -> Option<String> {
        self.source.var(key).filter(|v| !v.trim().is_empty())
    }

    /// Non-empty, trimmed value of `key`
    pub fn optional(&self, key: &str) -> Option<String> {
        self.raw(key).map(|v| v.trim().to_string())
    }

    /// Value of `key`; records it as missing and returns an empty string if unset
    pub fn required(&mut self, key: &str) -> String {
        match self.optional(key) {
            Some(value) => value,
            None => {
                self.missing.push(key.to_string());
                String::new()
            }
        }
    }

    /// Secret value of `key`, untrimmed
    ///
    /// Surrounding whitespace is part of the secret. A blank value is
    /// recorded as missing.
    pub fn required_secret(&mut self, key: &str) -> SecretString {
        match self.raw(key) {
            Some(value) => SecretString::new(value),
            None => {
                self.missing.push(key.to_string());
                SecretString::new("")
            }
        }
    }

    /// All-or-nothing group of variables
    ///
    /// Returns `None` when none of `keys` is set. When only some are set,
    /// the absent ones are recorded as missing.
    pub fn optional_group(&mut self, keys: &[&str]) -> Option<Vec<String>> {
        let values: Vec<Option<String>> = keys.iter().map(|k| self.optional(k)).collect();

        if values.iter().all(Option::is_none) {
            return None;
        }

        if values.iter().any(Option::is_none) {
            for (key, value) in keys.iter().zip(&values) {
                if value.is_none() {
                    self.missing.push(key.to_string());
                }
            }
            return None;
        }

        Some(values.into_iter().flatten().collect())
    }

    /// Runtime environment from `APP_ENV`, or the build default
    pub fn environment(&self) -> Result<Environment, ConfigError> {
        match self.optional(APP_ENV) {
            Some(value) => value.parse(),
            None => Ok(Environment::build_default()),
        }
    }

    /// Fails with every missing key collected so far
    pub fn finish(self) -> Result<(), ConfigError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Missing(self.missing))
        }
    }
}
