//! Domain Layer
//!
//! The moments document and the storage seam.

pub mod document;
pub mod store;

pub use document::{
    DocumentSummary, MAX_DOCUMENT_BYTES, MomentItem, MomentLink, MomentUser, MomentsDocument,
};
pub use store::{DocumentStore, JSON_CONTENT_TYPE, LocalDocumentStore, MOMENTS_KEY, StoreError};
