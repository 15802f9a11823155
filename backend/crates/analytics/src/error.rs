//! Analytics Error Types
//!
//! Every upstream failure surfaces as a 500 whose message is passed
//! through to the client.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Analytics-specific result type alias
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Analytics-specific error variants
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Login request answered with a non-success status
    #[error("Umami login failed: {0}")]
    LoginFailed(String),

    /// A freshly obtained or cached token failed verification
    #[error("Umami rejected the access token")]
    TokenRejected,

    /// Stats request answered with a non-success status
    #[error("Failed to fetch Umami stats: {0}")]
    StatsFailed(String),

    /// Network or decoding failure
    #[error("Umami request failed: {0}")]
    Transport(String),
}

impl AnalyticsError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InternalServerError
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        tracing::error!(error = %self, "Analytics upstream error");
    }
}

impl From<reqwest::Error> for AnalyticsError {
    fn from(err: reqwest::Error) -> Self {
        AnalyticsError::Transport(err.to_string())
    }
}

impl IntoResponse for AnalyticsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AnalyticsError> for AppError {
    fn from(err: AnalyticsError) -> Self {
        err.to_app_error()
    }
}
