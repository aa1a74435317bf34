//! Error handling for the hash registry

use isokdf_common::ErrorKind;
use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// The identifier does not name a registered algorithm
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

impl HashError {
    /// Create an `unsupported_algorithm` error
    #[must_use]
    pub fn unsupported(identifier: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm(identifier.into())
    }

    /// Shared classification of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedAlgorithm(_) => ErrorKind::UnsupportedAlgorithm,
        }
    }
}
