//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod read_moments;
pub mod write_moments;

// Re-exports
pub use config::{MomentsConfig, R2Config, StoreBackend};
pub use read_moments::{ReadMomentsUseCase, load_or_empty};
pub use write_moments::WriteMomentsUseCase;
