//! Domain Layer
//!
//! Contains the session claims carried inside the signed token.

pub mod claims;

// Re-exports
pub use claims::{Role, SessionClaims};
