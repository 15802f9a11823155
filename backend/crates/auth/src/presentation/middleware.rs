//! Auth Middleware
//!
//! `require_session` guards protected routes. `check_session` only records
//! whether the caller is signed in.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::application::AuthenticateUseCase;
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Middleware that requires a valid session
///
/// On success the verified [`crate::SessionClaims`] are stored in the
/// request extensions.
pub async fn require_session(
    State(state): State<AuthAppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = AuthenticateUseCase::new(state.codec.clone());
    let claims = use_case.execute(token.as_deref())?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Middleware that checks the session but doesn't require it
pub async fn check_session(
    State(state): State<AuthAppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = AuthenticateUseCase::new(state.codec.clone());
    let is_authenticated = use_case.is_authenticated(token.as_deref());

    // Store authentication status in request extensions
    req.extensions_mut().insert(AuthStatus { is_authenticated });

    next.run(req).await
}

/// Authentication status stored in request extensions
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthStatus {
    pub is_authenticated: bool,
}
