//! Infrastructure Layer
//!
//! Document store implementations.

pub mod memory;
pub mod s3;

pub use memory::InMemoryDocumentStore;
pub use s3::S3DocumentStore;
