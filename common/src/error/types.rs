//! Core error kinds

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Different kinds of errors that can occur during a derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A caller-supplied parameter violates a precondition
    #[error("Validation error")]
    Validation,

    /// An integer does not fit its fixed-width octet encoding
    #[error("Encoding error")]
    Encoding,

    /// The requested hash algorithm is not registered
    #[error("Unsupported algorithm")]
    UnsupportedAlgorithm,

    /// Configuration could not be read or parsed
    #[error("Configuration error")]
    Configuration,

    /// Internal error
    #[error("Internal error")]
    Internal,
}

impl ErrorKind {
    /// Stable lowercase identifier, used in JSON output
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Encoding => "encoding",
            Self::UnsupportedAlgorithm => "unsupported_algorithm",
            Self::Configuration => "configuration",
            Self::Internal => "internal",
        }
    }

    /// Whether the failure is the caller's to fix (as opposed to an internal fault)
    #[must_use]
    pub fn is_caller_error(self) -> bool {
        !matches!(self, Self::Internal)
    }
}
