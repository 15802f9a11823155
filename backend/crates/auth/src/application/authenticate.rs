//! Authenticate Use Case
//!
//! Verifies the session token carried by a request.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::claims::SessionClaims;
use crate::error::{AuthError, AuthResult};
use crate::infra::jwt::JwtCodec;

/// Authenticate use case
pub struct AuthenticateUseCase {
    codec: Arc<JwtCodec>,
}

impl AuthenticateUseCase {
    pub fn new(codec: Arc<JwtCodec>) -> Self {
        Self { codec }
    }

    pub fn execute(&self, token: Option<&str>) -> AuthResult<SessionClaims> {
        self.execute_at(token, Utc::now())
    }

    /// Verify `token` as of `now`
    pub fn execute_at(&self, token: Option<&str>, now: DateTime<Utc>) -> AuthResult<SessionClaims> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::Unauthenticated)?;

        let claims = self.codec.verify(token)?;

        if !claims.is_valid_at(now) {
            tracing::debug!(expired_at = claims.exp, "Session token expired");
            return Err(AuthError::InvalidToken);
        }

        Ok(claims)
    }

    /// Just check if the session is valid (returns bool)
    pub fn is_authenticated(&self, token: Option<&str>) -> bool {
        self.execute(token).is_ok()
    }
}
