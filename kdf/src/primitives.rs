//! Data conversion primitives (PKCS#1 §4, ISO 18033 §5.2.5)

use crate::{KdfError, Result};

/// Width of the counter encoding used by KDF1, KDF2 and MGF1
pub const COUNTER_WIDTH: usize = 4;

/// I2OSP: encode `value` as a big-endian octet string of exactly `length` octets
///
/// The result is zero-padded on the left. A zero `length` is always
/// rejected, even for a zero `value`.
///
/// # Errors
///
/// Returns [`KdfError::IntegerTooLarge`] if the minimal big-endian encoding of
/// `value` is longer than `length` octets.
pub fn i2osp(value: u64, length: usize) -> Result<Vec<u8>> {
    let minimal = (u64::BITS - value.leading_zeros()).div_ceil(8) as usize;
    if length == 0 || minimal > length {
        return Err(KdfError::IntegerTooLarge { value, length });
    }

    let mut out = vec![0u8; length];
    let be = value.to_be_bytes();
    out[length - minimal..].copy_from_slice(&be[be.len() - minimal..]);
    Ok(out)
}

/// OS2IP: decode a big-endian octet string into an integer
///
/// Leading zero octets are ignored, so any width decodes as long as the
/// value itself fits in 64 bits.
///
/// # Errors
///
/// Returns [`KdfError::IntegerTooLarge`] if the value needs more than 8 octets.
pub fn os2ip(bytes: &[u8]) -> Result<u64> {
    let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first..];
    if significant.len() > std::mem::size_of::<u64>() {
        return Err(KdfError::IntegerTooLarge {
            value: bytes.len() as u64,
            length: std::mem::size_of::<u64>(),
        });
    }

    Ok(significant
        .iter()
        .fold(0u64, |acc, b| (acc << 8) | u64::from(*b)))
}

/// Convert a signed length from an untyped boundary (config, CLI) into `usize`
///
/// # Errors
///
/// Returns [`KdfError::InvalidLength`] for negative values or values that do
/// not fit the platform's `usize`.
pub fn checked_length(requested: i64) -> Result<usize> {
    usize::try_from(requested).map_err(|_| KdfError::InvalidLength { requested })
}

/// Number of hash invocations needed for `length` octets: `ceil(length / hash_len)`
#[must_use]
pub(crate) fn block_count(length: usize, hash_len: usize) -> u64 {
    length.div_ceil(hash_len) as u64
}
