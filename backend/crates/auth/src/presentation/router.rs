//! Auth Router

use axum::{Router, routing::post};
use kernel::response::method_not_allowed;

use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router
pub fn auth_router(state: AuthAppState) -> Router {
    Router::new()
        .route(
            "/login",
            post(handlers::login).fallback(method_not_allowed),
        )
        .with_state(state)
}
