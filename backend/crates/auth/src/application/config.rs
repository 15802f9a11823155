//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::config::{EnvReader, EnvSource, Environment};
use platform::cookie::CookieConfig;
use platform::secret::SecretString;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

pub const JWT_SECRET: &str = "JWT_SECRET";
pub const LOGIN_AUTH_KEY: &str = "LOGIN_AUTH_KEY";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Secret for signing session tokens
    pub jwt_secret: SecretString,
    /// Shared login key
    pub login_auth_key: SecretString,
    /// Session lifetime (token expiry and cookie Max-Age)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "auth_token".to_string(),
            jwt_secret: SecretString::new(""),
            login_auth_key: SecretString::new(""),
            session_ttl: Duration::from_secs(7 * 24 * 3600), // 7 days
            cookie_secure: true,
            cookie_same_site: SameSite::Strict,
        }
    }
}

impl AuthConfig {
    /// Read `JWT_SECRET` and `LOGIN_AUTH_KEY`
    ///
    /// Missing keys are recorded on `reader`; call `reader.finish()` after
    /// all crates have read their configuration.
    pub fn from_env<S: EnvSource + ?Sized>(
        reader: &mut EnvReader<'_, S>,
        environment: Environment,
    ) -> Self {
        Self {
            jwt_secret: reader.required_secret(JWT_SECRET),
            login_auth_key: reader.required_secret(LOGIN_AUTH_KEY),
            cookie_secure: environment.is_production(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie, random signing secret)
    pub fn development(login_auth_key: impl Into<String>) -> Self {
        Self {
            jwt_secret: SecretString::random(32),
            login_auth_key: SecretString::new(login_auth_key),
            cookie_secure: false,
            ..Default::default()
        }
    }

    /// Cookie attributes for the session cookie
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            same_site: self.cookie_same_site,
            ..CookieConfig::strict_session(
                self.session_cookie_name.clone(),
                self.session_ttl,
                self.cookie_secure,
            )
        }
    }

    /// Session TTL as a chrono duration
    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl).unwrap_or(chrono::Duration::days(7))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::config::ConfigError;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();
        assert_eq!(config.session_cookie_name, "auth_token");
        assert_eq!(config.session_ttl, Duration::from_secs(604_800));
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Strict);
    }

    #[test]
    fn test_development_config() {
        let config = AuthConfig::development("key");
        assert!(!config.cookie_secure);
        assert!(!config.jwt_secret.is_empty());
        assert!(config.login_auth_key.matches("key"));
    }

    #[test]
    fn test_from_env_secure_flag_follows_environment() {
        let source: HashMap<String, String> = [
            (JWT_SECRET.to_string(), "s3cret".to_string()),
            (LOGIN_AUTH_KEY.to_string(), "login".to_string()),
        ]
        .into_iter()
        .collect();

        let mut reader = EnvReader::new(&source);
        let prod = AuthConfig::from_env(&mut reader, Environment::Production);
        let dev = AuthConfig::from_env(&mut reader, Environment::Development);
        assert!(reader.finish().is_ok());

        assert!(prod.cookie_secure);
        assert!(!dev.cookie_secure);
        assert!(prod.login_auth_key.matches("login"));
    }

    #[test]
    fn test_from_env_missing_keys() {
        let source: HashMap<String, String> = HashMap::new();
        let mut reader = EnvReader::new(&source);
        let config = AuthConfig::from_env(&mut reader, Environment::Production);

        assert!(config.jwt_secret.is_empty());
        assert!(config.login_auth_key.is_empty());
        assert_eq!(
            reader.finish(),
            Err(ConfigError::Missing(vec![
                JWT_SECRET.to_string(),
                LOGIN_AUTH_KEY.to_string()
            ]))
        );
    }

    #[test]
    fn test_from_env_login_key_is_exact() {
        let source: HashMap<String, String> = [
            (JWT_SECRET.to_string(), "s3cret".to_string()),
            (LOGIN_AUTH_KEY.to_string(), "  padded key ".to_string()),
        ]
        .into_iter()
        .collect();

        let mut reader = EnvReader::new(&source);
        let config = AuthConfig::from_env(&mut reader, Environment::Production);
        assert!(reader.finish().is_ok());

        assert!(config.login_auth_key.matches("  padded key "));
        assert!(!config.login_auth_key.matches("padded key"));
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = AuthConfig::default().session_cookie().build_set_cookie("tok");
        assert!(cookie.contains("auth_token=tok"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=604800"));
    }
}
