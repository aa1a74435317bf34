//! KDF4: ChaCha20 keystream keyed by a digest of the input
//!
//! Not part of ISO 18033 or PKCS#1. The construction is pinned so that it is
//! reproducible: the ChaCha20 key is `Hash(x)` right-padded with zeros (or
//! truncated) to 32 octets, and the output is the first `length` octets of
//! the keystream with an all-zero nonce and the block counter starting at 0,
//! as produced by `rand_chacha::ChaCha20Rng::from_seed`.

use crate::trace::{DerivationTrace, TraceEvent, emit};
use crate::{KdfFunction, Result};
use isokdf_hashing::HashAlgorithm;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};
use zeroize::Zeroizing;

/// ChaCha20 key length in octets
pub const KDF4_SEED_LEN: usize = 32;

/// ChaCha20 block length in octets
const CHACHA_BLOCK_LEN: usize = 64;

/// KDF4: `length` octets of ChaCha20 keystream keyed by `Hash(x)`
///
/// Every call seeds its own generator; there is no shared state between calls.
///
/// # Errors
///
/// Infallible for every registered hash; the `Result` keeps the signature
/// uniform with the other derivation functions.
pub fn kdf4(x: &[u8], length: usize, hash: HashAlgorithm) -> Result<Vec<u8>> {
    kdf4_with_trace(x, length, hash, None)
}

/// [`kdf4`] with an optional diagnostic hook
///
/// # Errors
///
/// See [`kdf4`].
pub fn kdf4_with_trace(
    x: &[u8],
    length: usize,
    hash: HashAlgorithm,
    trace: Option<&DerivationTrace>,
) -> Result<Vec<u8>> {
    emit(
        trace,
        TraceEvent::Plan {
            function: KdfFunction::Kdf4,
            hash,
            length,
            blocks: length.div_ceil(CHACHA_BLOCK_LEN) as u64,
        },
    );

    let mut rng = ChaCha20Rng::from_seed(*seed_from_digest(hash, x));
    let mut output = vec![0u8; length];
    rng.fill_bytes(&mut output);

    emit(
        trace,
        TraceEvent::Block {
            counter: 0,
            produced: length,
        },
    );
    Ok(output)
}

fn seed_from_digest(hash: HashAlgorithm, x: &[u8]) -> Zeroizing<[u8; KDF4_SEED_LEN]> {
    let digest = hash.digest(x);
    let digest = digest.as_bytes();
    let mut seed = Zeroizing::new([0u8; KDF4_SEED_LEN]);
    let take = digest.len().min(KDF4_SEED_LEN);
    seed[..take].copy_from_slice(&digest[..take]);
    seed
}
