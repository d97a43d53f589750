//! Per-response CSP nonces.
//!
//! A nonce is 16 bytes from the operating system CSPRNG, encoded as standard
//! base64 with padding. Every shell response draws its own nonce; nothing here
//! caches or remembers previously issued values.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::Result;

/// Raw entropy per nonce (128 bits).
pub const NONCE_BYTES_LEN: usize = 16;

/// Encoded length of a nonce, padding included.
pub const NONCE_ENCODED_LEN: usize = 24;

/// A single-use CSP nonce bound to one response.
#[derive(Clone, PartialEq, Eq)]
pub struct Nonce(String);

impl Nonce {
    /// Draws a fresh nonce from the OS random source.
    pub fn generate() -> Result<Self> {
        let mut bytes = [0u8; NONCE_BYTES_LEN];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self::from_bytes(bytes))
    }

    pub fn from_bytes(bytes: [u8; NONCE_BYTES_LEN]) -> Self {
        Self(STANDARD.encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Nonces must never end up in logs.
impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Nonce(..)")
    }
}

/// Source of nonces for the request handlers.
pub trait NonceSource: Send + Sync {
    fn next_nonce(&self) -> Result<Nonce>;
}

/// The production source, backed by `OsRng`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsNonceSource;

impl NonceSource for OsNonceSource {
    fn next_nonce(&self) -> Result<Nonce> {
        Nonce::generate()
    }
}
