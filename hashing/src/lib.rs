//! Hash algorithm registry for the isokdf derivation functions
//!
//! Maps each supported algorithm to its digest computation and its fixed
//! output length in octets.

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod digest_block;
pub mod error;

pub use algorithm::HashAlgorithm;
pub use digest_block::{DigestBlock, MAX_OUTPUT_LEN};
pub use error::HashError;
