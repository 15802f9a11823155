//! Infrastructure Layer
//!
//! Token signing implementation.

pub mod jwt;

pub use jwt::JwtCodec;
