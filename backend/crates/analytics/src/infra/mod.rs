//! Infrastructure Layer
//!
//! Umami API client.

pub mod umami;

pub use umami::UmamiClient;
