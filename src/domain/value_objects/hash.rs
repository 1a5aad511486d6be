//! Content Hash Value Object
//!
//! A SHA-256 digest of a file's bytes, used by the content comparator to
//! decide whether a destination already matches its source.

use std::fmt;
use std::io::Read;

use sha2::{Digest, Sha256};

/// Bytes read per chunk when hashing a stream
pub const HASH_CHUNK_SIZE: usize = 1024 * 1024;

/// Content hash value object
///
/// Wraps a SHA-256 hash string with the `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Hash an in-memory buffer
    pub fn from_bytes(content: &[u8]) -> Self {
        Self::from_digest(Sha256::digest(content))
    }

    /// Hash a reader in fixed-size chunks so memory stays bounded
    pub fn from_reader<R: Read>(mut reader: R) -> std::io::Result<Self> {
        let mut hasher = Sha256::new();
        let mut buf = vec![0u8; HASH_CHUNK_SIZE];
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            hasher.update(&buf[..n]);
        }
        Ok(Self::from_digest(hasher.finalize()))
    }

    fn from_digest(digest: impl fmt::LowerHex) -> Self {
        Self(format!("{}{:x}", Self::PREFIX, digest))
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
