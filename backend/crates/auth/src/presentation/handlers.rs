//! HTTP Handlers

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use std::sync::Arc;

use kernel::response::{Acknowledged, Envelope};

use crate::application::config::AuthConfig;
use crate::application::{IssueSessionInput, IssueSessionUseCase};
use crate::error::AuthResult;
use crate::infra::jwt::JwtCodec;
use crate::presentation::dto::LoginRequest;

/// Shared state for auth handlers and middleware
#[derive(Clone)]
pub struct AuthAppState {
    pub config: Arc<AuthConfig>,
    pub codec: Arc<JwtCodec>,
}

impl AuthAppState {
    pub fn new(config: AuthConfig) -> Self {
        let codec = JwtCodec::new(config.jwt_secret.as_bytes());
        Self {
            config: Arc::new(config),
            codec: Arc::new(codec),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login(
    State(state): State<AuthAppState>,
    body: Bytes,
) -> AuthResult<impl IntoResponse> {
    let req = LoginRequest::from_body(&body);

    let use_case = IssueSessionUseCase::new(state.config.clone(), state.codec.clone());
    let output = use_case.execute(IssueSessionInput {
        auth_key: req.auth_key,
    })?;

    Ok((
        [(header::SET_COOKIE, output.set_cookie)],
        Envelope::ok_with_message("Login successful", Acknowledged::yes()),
    ))
}
