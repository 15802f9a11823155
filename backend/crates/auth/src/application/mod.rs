//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod issue_session;

// Re-exports
pub use authenticate::AuthenticateUseCase;
pub use config::AuthConfig;
pub use issue_session::{IssueSessionInput, IssueSessionOutput, IssueSessionUseCase};
