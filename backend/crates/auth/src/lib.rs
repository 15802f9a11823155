//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session claims
//! - `application/` - Use cases (issue session, authenticate) and config
//! - `infra/` - JWT signing and verification
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Shared-secret login issuing a 7-day signed session cookie
//! - Stateless session verification for protected routes
//! - Soft session check for public routes that only annotate auth state
//!
//! ## Security Model
//! - A single operator: one privilege level ("editor" vs. anonymous)
//! - Login key compared in constant time
//! - Tokens are HS256 JWTs; valid iff the signature verifies and `now < exp`
//! - No server-side session store, no revocation list
//! - No rate limiting or lockout on failed logins

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::claims::{Role, SessionClaims};
pub use error::{AuthError, AuthResult};
pub use infra::jwt::JwtCodec;
pub use presentation::handlers::AuthAppState;
pub use presentation::middleware::{AuthStatus, check_session, require_session};
pub use presentation::router::auth_router;
