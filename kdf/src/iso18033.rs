//! ISO 18033-2 §6.2 key derivation functions
//!
//! All three take an octet string `x` and a length `l` and return exactly
//! `l` octets built from `ceil(l / hLen)` hash invocations.

use crate::counter::{CounterMode, MIN_KDF3_COUNTER_WIDTH, derive_with_mode};
use crate::trace::DerivationTrace;
use crate::{KdfError, KdfFunction, Result};
use isokdf_hashing::HashAlgorithm;

/// KDF1: concatenation of `Hash(x || I2OSP(i, 4))` for `i = 0..k-1`, truncated to `length`
///
/// # Errors
///
/// Returns [`KdfError::IntegerTooLarge`] if `length` needs more than 2^32 blocks.
pub fn kdf1(x: &[u8], length: usize, hash: HashAlgorithm) -> Result<Vec<u8>> {
    kdf1_with_trace(x, length, hash, None)
}

/// [`kdf1`] with an optional diagnostic hook
///
/// # Errors
///
/// See [`kdf1`].
pub fn kdf1_with_trace(
    x: &[u8],
    length: usize,
    hash: HashAlgorithm,
    trace: Option<&DerivationTrace>,
) -> Result<Vec<u8>> {
    derive_with_mode(KdfFunction::Kdf1, x, length, hash, CounterMode::KDF1, trace)
}

/// KDF2: as [`kdf1`] but with counters `1..k`
///
/// Block `j` of KDF2 equals block `j + 1` of KDF1.
///
/// # Errors
///
/// Returns [`KdfError::IntegerTooLarge`] if the last counter exceeds 2^32 - 1.
pub fn kdf2(x: &[u8], length: usize, hash: HashAlgorithm) -> Result<Vec<u8>> {
    kdf2_with_trace(x, length, hash, None)
}

/// [`kdf2`] with an optional diagnostic hook
///
/// # Errors
///
/// See [`kdf2`].
pub fn kdf2_with_trace(
    x: &[u8],
    length: usize,
    hash: HashAlgorithm,
    trace: Option<&DerivationTrace>,
) -> Result<Vec<u8>> {
    derive_with_mode(KdfFunction::Kdf2, x, length, hash, CounterMode::KDF2, trace)
}

/// KDF3: concatenation of `Hash(I2OSP(i, counter_width) || x)` for `i = 0..k-1`
///
/// The counter precedes `x`. When `x` is attacker-influenced, this removes
/// the structural similarity that a shared leading `x` would give successive
/// hash inputs.
///
/// # Errors
///
/// - [`KdfError::CounterWidthTooSmall`] if `counter_width` is below 4 octets
/// - [`KdfError::IntegerTooLarge`] if the last counter does not fit the width
pub fn kdf3(x: &[u8], length: usize, hash: HashAlgorithm, counter_width: usize) -> Result<Vec<u8>> {
    kdf3_with_trace(x, length, hash, counter_width, None)
}

/// [`kdf3`] with an optional diagnostic hook
///
/// # Errors
///
/// See [`kdf3`].
pub fn kdf3_with_trace(
    x: &[u8],
    length: usize,
    hash: HashAlgorithm,
    counter_width: usize,
    trace: Option<&DerivationTrace>,
) -> Result<Vec<u8>> {
    if counter_width < MIN_KDF3_COUNTER_WIDTH {
        return Err(KdfError::CounterWidthTooSmall {
            width: counter_width,
            minimum: MIN_KDF3_COUNTER_WIDTH,
        });
    }

    derive_with_mode(
        KdfFunction::Kdf3,
        x,
        length,
        hash,
        CounterMode::kdf3(counter_width),
        trace,
    )
}
