//! Cryptographic Utilities
//!
//! Randomness for generated secrets and comparison of shared keys.

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};

/// `len` bytes from the operating system RNG
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// SHA-256 digest of `data`
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Compare two secrets without leaking their length or common prefix
///
/// Both sides are hashed first so the comparison always covers 32 bytes,
/// and every byte is folded in before the result is read.
pub fn secrets_match(provided: &[u8], expected: &[u8]) -> bool {
    let (a, b) = (sha256(provided), sha256(expected));
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
