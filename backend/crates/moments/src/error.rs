//! Moments Error Types
//!
//! This module provides moments-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use auth::AuthError;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::store::StoreError;

/// Moments-specific result type alias
pub type MomentsResult<T> = Result<T, MomentsError>;

/// Moments-specific error variants
#[derive(Debug, Error)]
pub enum MomentsError {
    /// Object store failure other than a missing document
    #[error("Storage failure: {0}")]
    Storage(#[from] StoreError),

    /// Stored bytes are not valid JSON
    #[error("Stored moments document is corrupt: {0}")]
    CorruptDocument(#[source] serde_json::Error),

    /// Submitted body is not valid JSON
    #[error("Invalid moments document: {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// Submitted body exceeds the size limit
    #[error("Moments document exceeds the {limit} byte limit")]
    BodyTooLarge { limit: usize },

    /// Submitted body could not be read
    #[error("Failed to read request body: {0}")]
    UnreadableBody(String),

    /// Document could not be serialized
    #[error("Failed to serialize moments document: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Session check failed
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl MomentsError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MomentsError::InvalidBody(_) | MomentsError::UnreadableBody(_) => {
                ErrorKind::BadRequest
            }
            MomentsError::BodyTooLarge { .. } => ErrorKind::PayloadTooLarge,
            MomentsError::Auth(e) => e.kind(),
            MomentsError::Storage(_)
            | MomentsError::CorruptDocument(_)
            | MomentsError::Serialize(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            MomentsError::Storage(e) => {
                tracing::error!(error = %e, "Moments storage error");
            }
            MomentsError::CorruptDocument(e) => {
                tracing::error!(error = %e, "Moments document is not valid JSON");
            }
            MomentsError::Serialize(e) => {
                tracing::error!(error = %e, "Moments serialization error");
            }
            MomentsError::Auth(AuthError::InvalidToken) => {
                tracing::warn!("Moments write with invalid session token");
            }
            _ => {
                tracing::debug!(error = %self, "Moments error");
            }
        }
    }
}

impl IntoResponse for MomentsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<MomentsError> for AppError {
    fn from(err: MomentsError) -> Self {
        err.to_app_error()
    }
}
