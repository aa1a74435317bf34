//! Error handling for the derivation functions

use isokdf_common::ErrorKind;
use isokdf_hashing::HashError;
use thiserror::Error;

/// Derivation errors
///
/// Every variant is a deterministic precondition failure detected before any
/// output is produced; none of them are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KdfError {
    /// Requested output length is negative
    #[error("Invalid output length: {requested} (must be >= 0)")]
    InvalidLength {
        /// Length as supplied by the caller
        requested: i64,
    },

    /// Integer does not fit the requested fixed-width encoding
    #[error("Integer {value} too large to encode in {length} octets")]
    IntegerTooLarge {
        /// Offending value (for OS2IP, the number of input octets)
        value: u64,
        /// Width of the encoding in octets
        length: usize,
    },

    /// MGF1 seed or mask length exceeds 2^32 times the hash output length
    #[error("Mask too long: {length} exceeds limit {limit}")]
    MaskTooLong {
        /// Offending length in octets
        length: u64,
        /// Largest permitted length in octets
        limit: u64,
    },

    /// Hash algorithm identifier is not registered
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// KDF3 counter width below the ISO 18033 minimum
    #[error("Counter width {width} is below the minimum of {minimum} octets")]
    CounterWidthTooSmall {
        /// Requested width in octets
        width: usize,
        /// Minimum permitted width in octets
        minimum: usize,
    },

    /// Configuration could not be read or parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Internal error occurred
    #[error("Internal error: {0}")]
    Internal(String),
}

impl KdfError {
    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create an `invalid_config` error
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Shared classification of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLength { .. }
            | Self::MaskTooLong { .. }
            | Self::CounterWidthTooSmall { .. } => ErrorKind::Validation,
            Self::IntegerTooLarge { .. } => ErrorKind::Encoding,
            Self::UnsupportedAlgorithm(_) => ErrorKind::UnsupportedAlgorithm,
            Self::InvalidConfig(_) => ErrorKind::Configuration,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<HashError> for KdfError {
    fn from(err: HashError) -> Self {
        match err {
            HashError::UnsupportedAlgorithm(id) => Self::UnsupportedAlgorithm(id),
        }
    }
}

/// Result type for derivation operations
pub type Result<T> = std::result::Result<T, KdfError>;
