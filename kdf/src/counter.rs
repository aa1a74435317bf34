//! Counter-mode derivation engine shared by KDF1, KDF2, KDF3 and MGF1
//!
//! Each block is one hash invocation over the input and an I2OSP-encoded
//! counter. Blocks are concatenated in counter order and the result is
//! truncated to the requested length, so a shorter request is always a
//! prefix of a longer one.

use crate::primitives::{COUNTER_WIDTH, block_count, i2osp};
use crate::trace::{DerivationTrace, TraceEvent, emit};
use crate::{KdfError, KdfFunction, Result};
use isokdf_hashing::HashAlgorithm;
use zeroize::Zeroize;

/// Default KDF3 counter width in octets
pub const DEFAULT_KDF3_COUNTER_WIDTH: usize = 64;

/// Smallest KDF3 counter width accepted, in octets
pub const MIN_KDF3_COUNTER_WIDTH: usize = 4;

/// Where the encoded counter goes relative to the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPlacement {
    /// `Hash(C || x)` (KDF3)
    Prefix,
    /// `Hash(x || C)` (KDF1, KDF2, MGF1)
    Suffix,
}

/// One counter-mode construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterMode {
    /// First counter value
    pub start: u64,
    /// Counter encoding width in octets
    pub width: usize,
    /// Counter position in the hash input
    pub placement: CounterPlacement,
}

impl CounterMode {
    /// KDF1: counters `0..k-1`, 4 octets, after the input
    pub const KDF1: Self = Self {
        start: 0,
        width: COUNTER_WIDTH,
        placement: CounterPlacement::Suffix,
    };

    /// KDF2: counters `1..k`, 4 octets, after the input
    pub const KDF2: Self = Self {
        start: 1,
        width: COUNTER_WIDTH,
        placement: CounterPlacement::Suffix,
    };

    /// MGF1: identical block layout to KDF1
    pub const MGF1: Self = Self::KDF1;

    /// KDF3: counters `0..k-1`, `width` octets, before the input
    #[must_use]
    pub const fn kdf3(width: usize) -> Self {
        Self {
            start: 0,
            width,
            placement: CounterPlacement::Prefix,
        }
    }
}

/// Evaluate a counter-mode derivation
///
/// The final counter is encoded before any hashing so that a counter which
/// cannot be represented in `mode.width` octets fails without doing the work.
///
/// # Errors
///
/// Returns [`KdfError::IntegerTooLarge`] if the last counter does not fit in
/// `mode.width` octets.
pub fn derive_with_mode(
    function: KdfFunction,
    input: &[u8],
    length: usize,
    hash: HashAlgorithm,
    mode: CounterMode,
    trace: Option<&DerivationTrace>,
) -> Result<Vec<u8>> {
    let hash_len = hash.output_len();
    let blocks = block_count(length, hash_len);

    emit(
        trace,
        TraceEvent::Plan {
            function,
            hash,
            length,
            blocks,
        },
    );

    if blocks == 0 {
        return Ok(Vec::new());
    }

    let last = mode
        .start
        .checked_add(blocks - 1)
        .ok_or(KdfError::IntegerTooLarge {
            value: u64::MAX,
            length: mode.width,
        })?;
    i2osp(last, mode.width)?;

    let mut output = Vec::with_capacity(length.saturating_add(hash_len));
    for counter in mode.start..=last {
        let encoded = i2osp(counter, mode.width)?;
        let block = match mode.placement {
            CounterPlacement::Prefix => hash.digest_parts(&[&encoded, input]),
            CounterPlacement::Suffix => hash.digest_parts(&[input, &encoded]),
        };
        output.extend_from_slice(block.as_bytes());

        emit(
            trace,
            TraceEvent::Block {
                counter,
                produced: output.len().min(length),
            },
        );
    }

    output[length..].zeroize();
    output.truncate(length);
    Ok(output)
}
