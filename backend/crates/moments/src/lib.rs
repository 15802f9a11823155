//! Moments Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - The moments document and the document store trait
//! - `application/` - Use cases (read, write) and store configuration
//! - `infra/` - S3/R2 and in-memory store implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Behaviour
//! - One JSON document under `config/moment.json`, replaced wholesale on write
//! - Reads are public; an absent document reads as `[]`
//! - Writes require a session and are rejected before the body is parsed
//! - Write bodies above `MAX_DOCUMENT_BYTES` are refused with 413
//! - Concurrent writes race; the last completed write wins

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{MomentsConfig, R2Config, StoreBackend};
pub use domain::document::{MAX_DOCUMENT_BYTES, MomentsDocument};
pub use domain::store::{DocumentStore, MOMENTS_KEY, StoreError};
pub use error::{MomentsError, MomentsResult};
pub use infra::{InMemoryDocumentStore, S3DocumentStore};
pub use presentation::router::moments_router;

#[cfg(test)]
mod tests;
