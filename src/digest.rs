//! The 4-letter digest as a value type.

use std::fmt;
use std::str::FromStr;

use crate::hash::{build_blocks, compress, encode, sanitize, RunningHash, ALPHABET};
use crate::error::TthError;

/// Final running hash of a message, displayed as four letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(RunningHash);

impl Digest {
    /// Hashes `message`.
    pub fn of(message: &str) -> Self {
        Digest(compress(&build_blocks(&sanitize(message))))
    }

    /// Hashes raw bytes, which must be UTF-8.
    pub fn of_utf8(bytes: &[u8]) -> Result<Self, TthError> {
        Ok(Self::of(std::str::from_utf8(bytes)?))
    }

    /// Letter values, each in `0..26`.
    pub fn values(&self) -> RunningHash {
        self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(&self.0))
    }
}

impl FromStr for Digest {
    type Err = TthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(|b| ALPHABET.contains(b)) {
            return Err(TthError::InvalidDigest(s.to_string()));
        }
        let mut values = [0u8; 4];
        for (v, b) in values.iter_mut().zip(bytes) {
            *v = b - b'A';
        }
        Ok(Digest(values))
    }
}
