//! Derivation function identifiers and dispatch

use crate::counter::DEFAULT_KDF3_COUNTER_WIDTH;
use crate::trace::DerivationTrace;
use crate::{KdfError, Result, iso18033, kdf4, mgf};
use isokdf_hashing::HashAlgorithm;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The derivation functions this crate implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KdfFunction {
    /// ISO 18033 KDF1: `Hash(x || I2OSP(i, 4))`, `i = 0..k-1`
    Kdf1,
    /// ISO 18033 KDF2: `Hash(x || I2OSP(i, 4))`, `i = 1..k`
    #[default]
    Kdf2,
    /// ISO 18033 KDF3: `Hash(I2OSP(i, w) || x)`, `i = 0..k-1`
    Kdf3,
    /// ChaCha20 stream keyed by `Hash(x)`; not part of ISO 18033 or PKCS#1
    Kdf4,
    /// PKCS#1 MGF1 mask generation
    Mgf1,
}

impl KdfFunction {
    /// Every derivation function
    pub const ALL: [Self; 5] = [Self::Kdf1, Self::Kdf2, Self::Kdf3, Self::Kdf4, Self::Mgf1];

    /// Lowercase identifier
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kdf1 => "kdf1",
            Self::Kdf2 => "kdf2",
            Self::Kdf3 => "kdf3",
            Self::Kdf4 => "kdf4",
            Self::Mgf1 => "mgf1",
        }
    }

    /// Whether the function belongs to the ISO 18033 / PKCS#1 family
    #[must_use]
    pub const fn is_standard(self) -> bool {
        !matches!(self, Self::Kdf4)
    }

    /// Whether the counter width is caller-configurable
    #[must_use]
    pub const fn uses_counter_width(self) -> bool {
        matches!(self, Self::Kdf3)
    }

    /// Run this function over `input`
    ///
    /// `counter_width` is only consulted by KDF3.
    ///
    /// # Errors
    ///
    /// Propagates the precondition failures of the selected function.
    pub fn derive(
        self,
        input: &[u8],
        length: usize,
        hash: HashAlgorithm,
        counter_width: usize,
        trace: Option<&DerivationTrace>,
    ) -> Result<Vec<u8>> {
        match self {
            Self::Kdf1 => iso18033::kdf1_with_trace(input, length, hash, trace),
            Self::Kdf2 => iso18033::kdf2_with_trace(input, length, hash, trace),
            Self::Kdf3 => iso18033::kdf3_with_trace(input, length, hash, counter_width, trace),
            Self::Kdf4 => kdf4::kdf4_with_trace(input, length, hash, trace),
            Self::Mgf1 => mgf::mgf1_with_trace(input, length, hash, trace),
        }
    }

    /// Run this function with the default KDF3 counter width
    ///
    /// # Errors
    ///
    /// Propagates the precondition failures of the selected function.
    pub fn derive_default(self, input: &[u8], length: usize, hash: HashAlgorithm) -> Result<Vec<u8>> {
        self.derive(input, length, hash, DEFAULT_KDF3_COUNTER_WIDTH, None)
    }
}

impl fmt::Display for KdfFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KdfFunction {
    type Err = KdfError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == normalized)
            .ok_or_else(|| KdfError::invalid_config(format!("unknown derivation function: {}", s.trim())))
    }
}
