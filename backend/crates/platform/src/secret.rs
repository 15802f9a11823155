//! Secret Values
//!
//! Configuration secrets (login key, signing secret, storage credentials)
//! are held in [`SecretString`]:
//! - Zeroized when dropped
//! - Redacted in `Debug` output, so configs can be logged safely
//! - Compared only through [`SecretString::matches`] (constant time)

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{random_bytes, secrets_match};

/// String secret with automatic memory zeroization
///
/// ## Examples
/// ```rust
/// use platform::secret::SecretString;
///
/// let key = SecretString::new("hunter2");
/// assert_eq!(format!("{:?}", key), "SecretString(***)");
/// assert!(key.matches("hunter2"));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Random hex secret of `len` bytes (for development)
    pub fn random(len: usize) -> Self {
        let mut bytes = random_bytes(len);
        let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        bytes.zeroize();
        Self(hex)
    }

    /// Access the raw value
    ///
    /// Keep the borrow short; never log or clone the result.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Constant-time comparison against a caller-provided value
    pub fn matches(&self, provided: &str) -> bool {
        secrets_match(provided.as_bytes(), self.0.as_bytes())
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString(***)")
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self(value)
    }
}
