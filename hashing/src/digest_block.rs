//! Fixed-size digest output
//!
//! One hash invocation never produces more than [`MAX_OUTPUT_LEN`] octets, so
//! a block lives inline with no allocation. The buffer is wiped on drop since
//! counter-mode blocks are key material.

use crate::HashAlgorithm;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Longest output of any registered algorithm (SHA-512)
pub const MAX_OUTPUT_LEN: usize = 64;

/// One digest, sized by the algorithm that produced it
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DigestBlock {
    #[zeroize(skip)]
    algorithm: HashAlgorithm,
    bytes: [u8; MAX_OUTPUT_LEN],
}

impl DigestBlock {
    /// Empty block whose first `algorithm.output_len()` octets are to be filled
    pub(crate) fn zeroed(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            bytes: [0u8; MAX_OUTPUT_LEN],
        }
    }

    pub(crate) fn output_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[..self.algorithm.output_len()]
    }

    /// Algorithm that produced this digest
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// The digest octets; always `algorithm().output_len()` long
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.algorithm.output_len()]
    }

    /// Lowercase hex encoding of the digest
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl fmt::Debug for DigestBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestBlock")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}
