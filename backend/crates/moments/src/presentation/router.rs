//! Moments Router

use axum::extract::DefaultBodyLimit;
use axum::handler::Handler;
use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use auth::{AuthAppState, check_session, require_session};
use kernel::response::method_not_allowed;

use crate::domain::document::MAX_DOCUMENT_BYTES;
use crate::domain::store::DocumentStore;
use crate::presentation::handlers::{self, MomentsAppState};

/// Create the Moments router for any store implementation
///
/// Reads are public and annotated with the caller's session status.
/// Writes require a valid session. `HEAD` is refused explicitly, since
/// axum would otherwise answer it with the GET handler.
pub fn moments_router<S>(store: S, auth: AuthAppState) -> Router
where
    S: DocumentStore + Send + Sync + 'static,
{
    let state = MomentsAppState {
        store: Arc::new(store),
    };

    let read = handlers::read_moments::<S>
        .layer(middleware::from_fn_with_state(auth.clone(), check_session));
    let write = handlers::write_moments::<S>
        .layer(DefaultBodyLimit::max(MAX_DOCUMENT_BYTES))
        .layer(middleware::from_fn_with_state(auth, require_session));

    Router::new()
        .route(
            "/moments",
            get(read)
                .post(write)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}
