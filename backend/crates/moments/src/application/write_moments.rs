//! Write Moments Use Case

use std::sync::Arc;

use auth::SessionClaims;

use crate::domain::document::MomentsDocument;
use crate::domain::store::{DocumentStore, JSON_CONTENT_TYPE, MOMENTS_KEY};
use crate::error::{MomentsError, MomentsResult};

/// Write moments use case
///
/// Replaces the stored document wholesale. Concurrent writers race and the
/// last completed write wins.
pub struct WriteMomentsUseCase<S>
where
    S: DocumentStore,
{
    store: Arc<S>,
}

impl<S> WriteMomentsUseCase<S>
where
    S: DocumentStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Store `body` as the new document
    ///
    /// `session` is the verified session of the caller.
    pub async fn execute(&self, session: &SessionClaims, body: &[u8]) -> MomentsResult<()> {
        let document = MomentsDocument::from_bytes(body).map_err(MomentsError::InvalidBody)?;
        let bytes = document.to_pretty_bytes().map_err(MomentsError::Serialize)?;
        let size = bytes.len();

        self.store.put(MOMENTS_KEY, bytes, JSON_CONTENT_TYPE).await?;

        match document.summary() {
            Some(summary) => tracing::info!(
                user_id = %session.user_id,
                users = summary.users,
                moments = summary.moments,
                size,
                "Moments document replaced"
            ),
            None => tracing::info!(
                user_id = %session.user_id,
                size,
                "Moments document replaced (unconventional shape)"
            ),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryDocumentStore;
    use chrono::{Duration, Utc};

    fn session() -> SessionClaims {
        SessionClaims::editor(Utc::now(), Duration::days(7))
    }

    #[tokio::test]
    async fn test_write_is_pretty_json() {
        let store = Arc::new(InMemoryDocumentStore::new());
        WriteMomentsUseCase::new(store.clone())
            .execute(&session(), br#"[{"name":"a","avatar":"b","moment_list":[]}]"#)
            .await
            .unwrap();

        let object = store.object(MOMENTS_KEY).await.unwrap();
        assert_eq!(object.content_type, "application/json");
        let text = String::from_utf8(object.bytes).unwrap();
        assert!(text.starts_with("[\n  {\n    \""));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&text).unwrap(),
            serde_json::json!([{ "name": "a", "avatar": "b", "moment_list": [] }])
        );
    }

    #[tokio::test]
    async fn test_invalid_body_does_not_touch_storage() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let result = WriteMomentsUseCase::new(store.clone())
            .execute(&session(), b"{oops")
            .await;

        assert!(matches!(result, Err(MomentsError::InvalidBody(_))));
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_any_json_is_accepted() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let use_case = WriteMomentsUseCase::new(store.clone());

        use_case.execute(&session(), b"42").await.unwrap();
        use_case.execute(&session(), br#"{"x":null}"#).await.unwrap();
        assert_eq!(store.write_count(), 2);
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let store = Arc::new(InMemoryDocumentStore::new());
        store.set_failing(true);

        let result = WriteMomentsUseCase::new(store)
            .execute(&session(), b"[]")
            .await;
        assert!(matches!(result, Err(MomentsError::Storage(_))));
    }
}
