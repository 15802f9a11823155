//! Read Moments Use Case

use std::sync::Arc;

use crate::domain::document::MomentsDocument;
use crate::domain::store::{DocumentStore, MOMENTS_KEY, StoreError};
use crate::error::{MomentsError, MomentsResult};

/// Read moments use case
pub struct ReadMomentsUseCase<S>
where
    S: DocumentStore,
{
    store: Arc<S>,
}

impl<S> ReadMomentsUseCase<S>
where
    S: DocumentStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> MomentsResult<MomentsDocument> {
        load_or_empty(self.store.as_ref(), MOMENTS_KEY).await
    }
}

/// Fetch and parse the document under `key`
///
/// An absent object is the empty document. Stored bytes that are not JSON
/// are a storage failure.
pub async fn load_or_empty<S>(store: &S, key: &str) -> MomentsResult<MomentsDocument>
where
    S: DocumentStore,
{
    let bytes = match store.get(key).await {
        Ok(bytes) => bytes,
        Err(StoreError::NotFound(_)) => {
            tracing::debug!(key, "No moments document yet; serving empty list");
            return Ok(MomentsDocument::empty());
        }
        Err(e) => return Err(e.into()),
    };

    let document = MomentsDocument::from_bytes(&bytes).map_err(MomentsError::CorruptDocument)?;

    if let Some(summary) = document.summary() {
        tracing::debug!(
            key,
            users = summary.users,
            moments = summary.moments,
            "Loaded moments document"
        );
    }

    Ok(document)
}
