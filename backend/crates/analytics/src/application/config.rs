//! Application Configuration
//!
//! Connection settings for the Umami server.

use std::time::Duration;

use platform::config::{EnvReader, EnvSource};
use platform::secret::SecretString;

pub const UMAMI_SERVER_URL: &str = "UMAMI_SERVER_URL";
pub const UMAMI_USERNAME: &str = "UMAMI_USERNAME";
pub const UMAMI_PASSWORD: &str = "UMAMI_PASSWORD";
pub const UMAMI_WEBSITE_ID: &str = "UMAMI_WEBSITE_ID";

/// Analytics application configuration
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// Base URL without trailing slash
    pub server_url: String,
    pub username: String,
    pub password: SecretString,
    pub website_id: String,
    /// How long a bearer token is reused before logging in again
    pub token_ttl: Duration,
}

impl AnalyticsConfig {
    pub fn new(
        server_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        website_id: impl Into<String>,
    ) -> Self {
        Self {
            server_url: server_url.into().trim_end_matches('/').to_string(),
            username: username.into(),
            password: SecretString::new(password),
            website_id: website_id.into(),
            token_ttl: Duration::from_secs(60 * 60), // 1 hour
        }
    }

    /// Read the all-or-nothing `UMAMI_*` group
    ///
    /// Returns `None` when the group is absent. A partial group records the
    /// missing keys on `reader` and also returns `None`.
    pub fn from_env<S: EnvSource + ?Sized>(reader: &mut EnvReader<'_, S>) -> Option<Self> {
        let values = reader.optional_group(&[
            UMAMI_SERVER_URL,
            UMAMI_USERNAME,
            UMAMI_PASSWORD,
            UMAMI_WEBSITE_ID,
        ])?;

        match <[String; 4]>::try_from(values) {
            Ok([server_url, username, password, website_id]) => {
                Some(Self::new(server_url, username, password, website_id))
            }
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::config::ConfigError;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_full_group() {
        let source = env(&[
            (UMAMI_SERVER_URL, "https://umami.example.com/"),
            (UMAMI_USERNAME, "admin"),
            (UMAMI_PASSWORD, "pw"),
            (UMAMI_WEBSITE_ID, "site-1"),
        ]);
        let mut reader = EnvReader::new(&source);
        let config = AnalyticsConfig::from_env(&mut reader).unwrap();
        assert!(reader.finish().is_ok());

        assert_eq!(config.server_url, "https://umami.example.com");
        assert_eq!(config.website_id, "site-1");
        assert_eq!(config.token_ttl, Duration::from_secs(3600));
        assert!(!format!("{:?}", config).contains("pw\""));
    }

    #[test]
    fn test_absent_group_is_optional() {
        let source = env(&[]);
        let mut reader = EnvReader::new(&source);
        assert!(AnalyticsConfig::from_env(&mut reader).is_none());
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn test_partial_group_is_an_error() {
        let source = env(&[(UMAMI_SERVER_URL, "https://umami.example.com")]);
        let mut reader = EnvReader::new(&source);
        assert!(AnalyticsConfig::from_env(&mut reader).is_none());
        assert_eq!(
            reader.finish(),
            Err(ConfigError::Missing(vec![
                UMAMI_USERNAME.to_string(),
                UMAMI_PASSWORD.to_string(),
                UMAMI_WEBSITE_ID.to_string(),
            ]))
        );
    }
}
