//! Mask generation function MGF1 (PKCS#1 v2.2 B.2.1, IEEE P1363)

use crate::counter::{CounterMode, derive_with_mode};
use crate::trace::DerivationTrace;
use crate::{KdfError, KdfFunction, Result};
use isokdf_hashing::HashAlgorithm;
use zeroize::Zeroizing;

/// `2^32 * hLen`: bound on both the seed length and the mask length
#[must_use]
pub fn mask_limit(hash: HashAlgorithm) -> u64 {
    (1u64 << 32) * hash.output_len() as u64
}

/// MGF1: first `mask_len` octets of `Hash(seed || I2OSP(i, 4))` for `i = 0, 1, ...`
///
/// Produces the same octets as KDF1 over the same inputs.
///
/// # Errors
///
/// Returns [`KdfError::MaskTooLong`] if `seed.len() >= 2^32 * hLen` or
/// `mask_len > 2^32 * hLen`.
pub fn mgf1(seed: &[u8], mask_len: usize, hash: HashAlgorithm) -> Result<Vec<u8>> {
    mgf1_with_trace(seed, mask_len, hash, None)
}

/// [`mgf1`] with an optional diagnostic hook
///
/// # Errors
///
/// See [`mgf1`].
pub fn mgf1_with_trace(
    seed: &[u8],
    mask_len: usize,
    hash: HashAlgorithm,
    trace: Option<&DerivationTrace>,
) -> Result<Vec<u8>> {
    let limit = mask_limit(hash);

    let seed_len = seed.len() as u64;
    if seed_len >= limit {
        return Err(KdfError::MaskTooLong {
            length: seed_len,
            limit,
        });
    }

    let mask_len_octets = mask_len as u64;
    if mask_len_octets > limit {
        return Err(KdfError::MaskTooLong {
            length: mask_len_octets,
            limit,
        });
    }

    derive_with_mode(KdfFunction::Mgf1, seed, mask_len, hash, CounterMode::MGF1, trace)
}

/// XOR the MGF1 mask for `seed` into `out`, the form OAEP and PSS consume
///
/// Applying the same mask twice restores the original buffer.
///
/// # Errors
///
/// See [`mgf1`].
pub fn mgf1_xor(out: &mut [u8], seed: &[u8], hash: HashAlgorithm) -> Result<()> {
    let mask = Zeroizing::new(mgf1(seed, out.len(), hash)?);
    for (byte, m) in out.iter_mut().zip(mask.iter()) {
        *byte ^= m;
    }
    Ok(())
}
