//! Derivation configuration
//!
//! Parameters for a derivation as they arrive from files or command lines.
//! Lengths are signed here because that is where a negative value can show
//! up; validation turns them into `usize` before anything runs.

use crate::counter::{DEFAULT_KDF3_COUNTER_WIDTH, MIN_KDF3_COUNTER_WIDTH};
use crate::primitives::checked_length;
use crate::{KdfError, KdfFunction, Result};
use isokdf_hashing::HashAlgorithm;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Derivation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationConfig {
    /// Function to evaluate
    #[serde(default)]
    pub function: KdfFunction,
    /// Hash algorithm
    #[serde(default)]
    pub hash: HashAlgorithm,
    /// KDF3 counter width in octets (ignored by the other functions)
    #[serde(default = "default_counter_width")]
    pub counter_width: usize,
    /// Requested output length in octets
    #[serde(default = "default_length")]
    pub length: i64,
}

fn default_counter_width() -> usize {
    DEFAULT_KDF3_COUNTER_WIDTH
}

fn default_length() -> i64 {
    32
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self {
            function: KdfFunction::default(),
            hash: HashAlgorithm::default(),
            counter_width: default_counter_width(),
            length: default_length(),
        }
    }
}

/// Wire form with plain strings, so unknown identifiers map to our own errors
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDerivationConfig {
    function: Option<String>,
    hash: Option<String>,
    counter_width: Option<usize>,
    length: Option<i64>,
}

impl DerivationConfig {
    /// ISO 18033 KDF1 with SHA-1, 32 octets
    #[must_use]
    pub fn iso18033_kdf1() -> Self {
        Self {
            function: KdfFunction::Kdf1,
            ..Self::default()
        }
    }

    /// ISO 18033 KDF2 with SHA-1, 32 octets
    #[must_use]
    pub fn iso18033_kdf2() -> Self {
        Self {
            function: KdfFunction::Kdf2,
            ..Self::default()
        }
    }

    /// ISO 18033 KDF3 with SHA-1, 64-octet counter, 32 octets
    #[must_use]
    pub fn iso18033_kdf3() -> Self {
        Self {
            function: KdfFunction::Kdf3,
            ..Self::default()
        }
    }

    /// PKCS#1 MGF1 with SHA-256, 32 octets
    #[must_use]
    pub fn pkcs1_mgf1() -> Self {
        Self {
            function: KdfFunction::Mgf1,
            hash: HashAlgorithm::Sha256,
            ..Self::default()
        }
    }

    /// Parse a JSON document; absent fields take their defaults
    ///
    /// # Errors
    ///
    /// - [`KdfError::InvalidConfig`] for malformed JSON, unknown fields or an
    ///   unknown function name
    /// - [`KdfError::UnsupportedAlgorithm`] for an unregistered hash identifier
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawDerivationConfig = serde_json::from_str(json)
            .map_err(|e| KdfError::invalid_config(format!("malformed configuration: {e}")))?;

        let defaults = Self::default();
        Ok(Self {
            function: raw
                .function
                .as_deref()
                .map(str::parse::<KdfFunction>)
                .transpose()?
                .unwrap_or(defaults.function),
            hash: raw
                .hash
                .as_deref()
                .map(str::parse::<HashAlgorithm>)
                .transpose()?
                .unwrap_or(defaults.hash),
            counter_width: raw.counter_width.unwrap_or(defaults.counter_width),
            length: raw.length.unwrap_or(defaults.length),
        })
    }

    /// Read and parse a JSON configuration file
    ///
    /// # Errors
    ///
    /// Returns [`KdfError::InvalidConfig`] if the file cannot be read, plus
    /// everything [`Self::from_json_str`] can return.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            KdfError::invalid_config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&contents)
    }

    /// Serialize to pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns [`KdfError::Internal`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| KdfError::internal(format!("config serialization failed: {e}")))
    }

    /// Check the parameters and return the output length as `usize`
    ///
    /// # Errors
    ///
    /// - [`KdfError::InvalidLength`] for a negative length
    /// - [`KdfError::CounterWidthTooSmall`] for a KDF3 width below 4 octets
    pub fn validate(&self) -> Result<usize> {
        let length = checked_length(self.length)?;
        if self.function.uses_counter_width() && self.counter_width < MIN_KDF3_COUNTER_WIDTH {
            return Err(KdfError::CounterWidthTooSmall {
                width: self.counter_width,
                minimum: MIN_KDF3_COUNTER_WIDTH,
            });
        }
        Ok(length)
    }
}
