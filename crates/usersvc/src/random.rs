//! Secure random byte source used for identifier generation.

use rand::rngs::OsRng;
use rand::TryRngCore;
use thiserror::Error;

/// The operating system's random source could not supply bytes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Secure random source failed: {0}")]
pub struct EntropyError(pub String);

/// A fallible source of cryptographically secure bytes.
pub trait RandomSource: Send + Sync {
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError>;
}

/// Reads directly from the operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| EntropyError(e.to_string()))
    }
}
