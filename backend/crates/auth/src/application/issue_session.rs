//! Issue Session Use Case
//!
//! Verifies the shared login key and issues a signed session token.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::domain::claims::SessionClaims;
use crate::error::{AuthError, AuthResult};
use crate::infra::jwt::JwtCodec;

/// Issue session input
pub struct IssueSessionInput {
    /// Login key supplied by the caller (absent counts as a mismatch)
    pub auth_key: Option<String>,
}

/// Issue session output
pub struct IssueSessionOutput {
    /// Signed token for the cookie
    pub session_token: String,
    /// Claims embedded in the token
    pub claims: SessionClaims,
    /// Full `Set-Cookie` value carrying the token
    pub set_cookie: String,
}

/// Issue session use case
pub struct IssueSessionUseCase {
    config: Arc<AuthConfig>,
    codec: Arc<JwtCodec>,
}

impl IssueSessionUseCase {
    pub fn new(config: Arc<AuthConfig>, codec: Arc<JwtCodec>) -> Self {
        Self { config, codec }
    }

    pub fn execute(&self, input: IssueSessionInput) -> AuthResult<IssueSessionOutput> {
        self.execute_at(input, Utc::now())
    }

    /// Issue a session as of `now`
    pub fn execute_at(
        &self,
        input: IssueSessionInput,
        now: DateTime<Utc>,
    ) -> AuthResult<IssueSessionOutput> {
        let provided = input.auth_key.unwrap_or_default();

        if provided.is_empty() || !self.config.login_auth_key.matches(&provided) {
            return Err(AuthError::InvalidCredential);
        }

        let claims = SessionClaims::editor(now, self.config.session_ttl_chrono());
        let session_token = self.codec.sign(&claims)?;
        let set_cookie = self.config.session_cookie().build_set_cookie(&session_token);

        tracing::info!(
            user_id = %claims.user_id,
            role = %claims.role,
            expires_at = claims.exp,
            "Session issued"
        );

        Ok(IssueSessionOutput {
            session_token,
            claims,
            set_cookie,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn use_case() -> IssueSessionUseCase {
        let config = AuthConfig::development("open-sesame");
        let codec = JwtCodec::new(config.jwt_secret.as_bytes());
        IssueSessionUseCase::new(Arc::new(config), Arc::new(codec))
    }

    fn input(key: Option<&str>) -> IssueSessionInput {
        IssueSessionInput {
            auth_key: key.map(str::to_string),
        }
    }

    #[test]
    fn test_matching_key_issues_seven_day_session() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let output = use_case().execute_at(input(Some("open-sesame")), now).unwrap();

        assert_eq!(output.claims.iat, now.timestamp());
        assert_eq!(output.claims.exp, (now + Duration::days(7)).timestamp());
        assert!(
            output
                .set_cookie
                .starts_with(&format!("auth_token={}", output.session_token))
        );
    }

    #[test]
    fn test_wrong_key_rejected() {
        let result = use_case().execute(input(Some("wrong")));
        assert!(matches!(result, Err(AuthError::InvalidCredential)));
    }

    #[test]
    fn test_missing_or_empty_key_rejected() {
        assert!(matches!(
            use_case().execute(input(None)),
            Err(AuthError::InvalidCredential)
        ));
        assert!(matches!(
            use_case().execute(input(Some(""))),
            Err(AuthError::InvalidCredential)
        ));
    }

    #[test]
    fn test_near_miss_rejected() {
        assert!(use_case().execute(input(Some("open-sesame "))).is_err());
        assert!(use_case().execute(input(Some("Open-sesame"))).is_err());
    }
}
