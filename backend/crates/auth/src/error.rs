//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login key did not match
    #[error("Invalid authentication key")]
    InvalidCredential,

    /// No session token on the request
    #[error("Authentication failed: no session token provided")]
    Unauthenticated,

    /// Session token has a bad signature, is malformed, or has expired
    #[error("Authentication failed: invalid or expired session token")]
    InvalidToken,

    /// Token signing failed
    #[error("Failed to sign session token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredential | AuthError::Unauthenticated | AuthError::InvalidToken => {
                ErrorKind::Unauthorized
            }
            AuthError::Signing(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Signing(e) => {
                tracing::error!(error = %e, "Session token signing failed");
            }
            AuthError::InvalidCredential => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected invalid session token");
            }
            AuthError::Unauthenticated => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error()
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_auth_failures_are_unauthorized() {
        assert_eq!(AuthError::InvalidCredential.status_code(), 401);
        assert_eq!(AuthError::Unauthenticated.status_code(), 401);
        assert_eq!(AuthError::InvalidToken.status_code(), 401);
    }

    #[test]
    fn test_messages_distinguish_failures() {
        let missing = AuthError::Unauthenticated.to_app_error();
        let invalid = AuthError::InvalidToken.to_app_error();
        assert_ne!(missing.message(), invalid.message());
        assert!(invalid.message().contains("invalid"));
    }
}
