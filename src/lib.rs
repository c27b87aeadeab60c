//! Toy Tetragraph Hash (TTH).
//!
//! A pedagogical, non-cryptographic hash producing a 4-letter digest over
//! `A-Z`. The message is reduced to its ASCII letters, cut into 4×4 blocks
//! and each block is folded into a running column sum (mod 26) twice:
//! once as-is and once after a fixed row permutation.
//!
//! **Not collision resistant. Do not use for security.**
//!
//! ```
//! assert_eq!(tth::tth_hash("ABCDEFGHIJKLMNOP"), "FHJL");
//! assert_eq!(tth::tth_hash("hello, World!"), tth::tth_hash("HELLOWORLD"));
//! ```

pub mod hash;
pub mod digest;
pub mod error;

#[cfg(feature = "python")]
mod python;

pub use hash::{build_blocks, compress, encode, sanitize, shift_rows, trace, tth_hash};
pub use hash::{Block, RoundTrace, RunningHash};
pub use digest::Digest;
pub use error::TthError;

/// Convenience: hash raw bytes, rejecting anything that is not UTF-8
pub fn tth_hash_utf8(data: &[u8]) -> Result<String, TthError> {
    Ok(tth_hash(std::str::from_utf8(data)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_hash() {
        let digest = tth_hash("hello world");
        assert_eq!(digest.len(), 4);
        assert!(digest.bytes().all(|b| b.is_ascii_uppercase()));
    }

    #[test]
    fn test_hash_utf8() {
        assert_eq!(tth_hash_utf8(b"abc").unwrap(), "BDCA");
        assert!(tth_hash_utf8(&[0xff, 0xfe]).is_err());
    }
}
