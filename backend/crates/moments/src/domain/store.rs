//! Document Store Trait
//!
//! Byte-oriented access to single objects in the object store.
//! Implementations are in the infrastructure layer.

use thiserror::Error;

/// Object key of the moments document
pub const MOMENTS_KEY: &str = "config/moment.json";

/// Content type written with every document
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// No object under the key
    #[error("No object stored under {0}")]
    NotFound(String),

    /// Any other backend failure (network, permission, throttling, body stream)
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Document store trait
///
/// `put` overwrites wholesale. There is no conditional write, so the last
/// completed `put` wins.
#[trait_variant::make(DocumentStore: Send)]
pub trait LocalDocumentStore {
    /// Fetch the bytes stored under `key`
    async fn get(&self, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Replace the object under `key`
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), StoreError>;
}
