//! Error types for the boundaries around the hash.
//!
//! The hash itself is total; these only arise when turning raw input into
//! text or text into a [`Digest`](crate::Digest).

use thiserror::Error;

/// Errors produced at the edges of the tth library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TthError {
    /// Message bytes are not valid UTF-8.
    #[error("Message is not valid UTF-8 (invalid byte at offset {offset})")]
    InvalidUtf8 {
        /// Offset of the first byte that failed to decode.
        offset: usize,
    },

    /// String is not exactly four letters A-Z.
    #[error("Invalid digest {0:?}: expected 4 letters A-Z")]
    InvalidDigest(String),
}

impl From<std::str::Utf8Error> for TthError {
    fn from(err: std::str::Utf8Error) -> Self {
        TthError::InvalidUtf8 {
            offset: err.valid_up_to(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_utf8() {
        let err = TthError::InvalidUtf8 { offset: 3 };
        assert_eq!(
            err.to_string(),
            "Message is not valid UTF-8 (invalid byte at offset 3)"
        );
    }

    #[test]
    fn test_display_invalid_digest() {
        let err = TthError::InvalidDigest("AB1".into());
        assert_eq!(err.to_string(), "Invalid digest \"AB1\": expected 4 letters A-Z");
    }

    #[test]
    fn test_from_utf8_error() {
        let bytes = [b'o', b'k', 0xff, b'!'];
        let err: TthError = std::str::from_utf8(&bytes).unwrap_err().into();
        assert_eq!(err, TthError::InvalidUtf8 { offset: 2 });
    }
}
