//! Application Configuration
//!
//! Selects and configures the document store backing the moments endpoint.

use std::str::FromStr;

use platform::config::{ConfigError, EnvReader, EnvSource};
use platform::secret::SecretString;

pub const MOMENTS_STORE: &str = "MOMENTS_STORE";
pub const R2_BUCKET_NAME: &str = "R2_BUCKET_NAME";
pub const R2_ACCOUNT_ID: &str = "R2_ACCOUNT_ID";
pub const R2_ACCESS_KEY_ID: &str = "R2_ACCESS_KEY_ID";
pub const R2_SECRET_ACCESS_KEY: &str = "R2_SECRET_ACCESS_KEY";
pub const R2_ENDPOINT: &str = "R2_ENDPOINT";

/// Which store implementation to run against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    R2,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r2" | "s3" => Ok(StoreBackend::R2),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(ConfigError::Invalid {
                key: MOMENTS_STORE.to_string(),
                reason: format!("expected `r2` or `memory`, got `{}`", other),
            }),
        }
    }
}

/// Cloudflare R2 connection settings
#[derive(Debug, Clone)]
pub struct R2Config {
    pub bucket: String,
    pub account_id: String,
    pub access_key_id: String,
    pub secret_access_key: SecretString,
    /// Overrides the endpoint derived from the account id
    pub endpoint_override: Option<String>,
}

impl R2Config {
    /// `https://<account>.r2.cloudflarestorage.com` unless overridden
    pub fn endpoint(&self) -> String {
        self.endpoint_override
            .clone()
            .unwrap_or_else(|| format!("https://{}.r2.cloudflarestorage.com", self.account_id))
    }
}

/// Moments application configuration
#[derive(Debug, Clone, Default)]
pub struct MomentsConfig {
    pub backend: StoreBackend,
    /// Present when `backend` is R2
    pub r2: Option<R2Config>,
}

impl MomentsConfig {
    /// Read the store selection and, for R2, its four required variables
    ///
    /// Missing keys are recorded on `reader`. An unknown `MOMENTS_STORE`
    /// value is returned as an error immediately.
    pub fn from_env<S: EnvSource + ?Sized>(
        reader: &mut EnvReader<'_, S>,
    ) -> Result<Self, ConfigError> {
        let backend = match reader.optional(MOMENTS_STORE) {
            Some(value) => value.parse()?,
            None => StoreBackend::default(),
        };

        let r2 = match backend {
            StoreBackend::R2 => Some(R2Config {
                bucket: reader.required(R2_BUCKET_NAME),
                account_id: reader.required(R2_ACCOUNT_ID),
                access_key_id: reader.required(R2_ACCESS_KEY_ID),
                secret_access_key: reader.required_secret(R2_SECRET_ACCESS_KEY),
                endpoint_override: reader.optional(R2_ENDPOINT),
            }),
            StoreBackend::Memory => None,
        };

        Ok(Self { backend, r2 })
    }

    /// Create config for development (in-memory store)
    pub fn development() -> Self {
        Self {
            backend: StoreBackend::Memory,
            r2: None,
        }
    }
}
