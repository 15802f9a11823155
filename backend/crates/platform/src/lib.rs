//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Environment configuration loading (fail-fast, all missing keys reported)
//! - Secret handling (zeroized on drop, redacted in logs)
//! - Key comparison and randomness (SHA-256, constant-time equality)
//! - Cookie management

pub mod config;
pub mod cookie;
pub mod crypto;
pub mod secret;
