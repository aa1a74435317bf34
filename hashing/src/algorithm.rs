//! Hash algorithm registry
//!
//! A closed set of algorithms, each with a fixed output length known at
//! compile time. There is no runtime table to mutate.

use crate::{DigestBlock, HashError};
use digest::Digest;
use zeroize::Zeroize;
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use std::fmt;
use std::str::FromStr;

/// Hash algorithms available to the derivation functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// MD5 (16 octets)
    Md5,
    /// SHA-1 (20 octets), the ISO 18033 test-vector default
    #[default]
    Sha1,
    /// SHA-224 (28 octets)
    Sha224,
    /// SHA-256 (32 octets)
    Sha256,
    /// SHA-384 (48 octets)
    Sha384,
    /// SHA-512 (64 octets)
    Sha512,
}

impl HashAlgorithm {
    /// Every registered algorithm, shortest output first
    pub const ALL: [Self; 6] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
    ];

    /// Output length of one digest in octets
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Canonical lowercase name (hashlib spelling)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Digest of `data`
    #[must_use]
    pub fn digest(self, data: &[u8]) -> DigestBlock {
        self.digest_parts(&[data])
    }

    /// Digest of the concatenation of `parts`, fed to the hasher in order
    ///
    /// Equivalent to hashing `parts.concat()` without building the
    /// concatenated buffer.
    #[must_use]
    pub fn digest_parts(self, parts: &[&[u8]]) -> DigestBlock {
        let mut block = DigestBlock::zeroed(self);
        let out = block.output_mut();
        match self {
            Self::Md5 => compute_fixed_digest::<Md5>(parts, out),
            Self::Sha1 => compute_fixed_digest::<Sha1>(parts, out),
            Self::Sha224 => compute_fixed_digest::<Sha224>(parts, out),
            Self::Sha256 => compute_fixed_digest::<Sha256>(parts, out),
            Self::Sha384 => compute_fixed_digest::<Sha384>(parts, out),
            Self::Sha512 => compute_fixed_digest::<Sha512>(parts, out),
        }
        block
    }
}

// `out` is exactly `D::output_size()` octets; `output_len` mirrors each hasher
fn compute_fixed_digest<D: Digest>(parts: &[&[u8]], out: &mut [u8]) {
    let mut hasher = D::new();
    for part in parts {
        hasher.update(part);
    }
    let mut digest = hasher.finalize();
    out.copy_from_slice(&digest);
    digest.as_mut_slice().zeroize();
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    /// Accepts `sha256`, `SHA-256`, `sha_256` and similar spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == normalized)
            .ok_or_else(|| HashError::unsupported(s.trim()))
    }
}
