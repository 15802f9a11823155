//! HTTP Handlers

use axum::Extension;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use std::sync::Arc;

use auth::{AuthStatus, SessionClaims};
use kernel::response::{Acknowledged, Envelope};

use crate::application::{ReadMomentsUseCase, WriteMomentsUseCase};
use crate::domain::document::MAX_DOCUMENT_BYTES;
use crate::domain::store::DocumentStore;
use crate::error::{MomentsError, MomentsResult};
use crate::presentation::dto::MomentsView;

/// Shared state for moments handlers
pub struct MomentsAppState<S>
where
    S: DocumentStore + Send + Sync + 'static,
{
    pub store: Arc<S>,
}

// Manual impl: `S` itself need not be `Clone`
impl<S> Clone for MomentsAppState<S>
where
    S: DocumentStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

/// GET /api/moments
pub async fn read_moments<S>(
    State(state): State<MomentsAppState<S>>,
    Extension(status): Extension<AuthStatus>,
) -> MomentsResult<Envelope<MomentsView>>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let use_case = ReadMomentsUseCase::new(state.store.clone());
    let document = use_case.execute().await?;

    Ok(Envelope::ok(MomentsView {
        is_authenticated: status.is_authenticated,
        moments: document.into_value(),
    }))
}

/// POST /api/moments
///
/// Runs behind `require_session`, so the body is only read once the
/// session has been verified. Body rejections are answered in the envelope.
pub async fn write_moments<S>(
    State(state): State<MomentsAppState<S>>,
    Extension(session): Extension<SessionClaims>,
    body: Result<Bytes, BytesRejection>,
) -> MomentsResult<Envelope<Acknowledged>>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            MomentsError::BodyTooLarge {
                limit: MAX_DOCUMENT_BYTES,
            }
        } else {
            MomentsError::UnreadableBody(rejection.body_text())
        }
    })?;

    let use_case = WriteMomentsUseCase::new(state.store.clone());
    use_case.execute(&session, &body).await?;

    Ok(Envelope::ok(Acknowledged::yes()))
}
