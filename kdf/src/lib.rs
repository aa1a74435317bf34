//! # ISO 18033 and PKCS#1 key derivation
//!
//! Counter-mode derivation functions that stretch a shared secret into key
//! material of any requested length:
//!
//! - **KDF1 / KDF2 / KDF3** from ISO 18033-2 §6.2
//! - **MGF1** from PKCS#1 / IEEE P1363
//! - **KDF4**, a ChaCha20 keystream keyed by a digest of the input (not
//!   part of either standard)
//!
//! ## Quick Start
//!
//! ```rust
//! use isokdf_kdf::{Kdf, kdf1};
//! use isokdf_hashing::HashAlgorithm;
//!
//! let secret = [0xde, 0xad, 0xbe, 0xef, 0xfe, 0xeb, 0xda, 0xed];
//! let key = Kdf::kdf1().with_hash(HashAlgorithm::Sha1).derive(&secret, 32)?;
//! assert_eq!(key.as_bytes(), kdf1(&secret, 32, HashAlgorithm::Sha1)?.as_slice());
//! # Ok::<(), isokdf_kdf::KdfError>(())
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod async_result;
pub mod config;
pub mod counter;
pub mod derived_key;
pub mod error;
pub mod function;
pub mod iso18033;
pub mod kdf4;
pub mod mgf;
pub mod primitives;
pub mod trace;

pub use api::{Kdf, KdfBuilder, KdfBuilderWithHandler};
pub use async_result::AsyncKdfResult;
pub use config::DerivationConfig;
pub use counter::{
    CounterMode, CounterPlacement, DEFAULT_KDF3_COUNTER_WIDTH, MIN_KDF3_COUNTER_WIDTH,
    derive_with_mode,
};
pub use derived_key::DerivedKey;
pub use error::{KdfError, Result};
pub use function::KdfFunction;
pub use iso18033::{kdf1, kdf1_with_trace, kdf2, kdf2_with_trace, kdf3, kdf3_with_trace};
pub use kdf4::{kdf4, kdf4_with_trace};
pub use mgf::{mask_limit, mgf1, mgf1_with_trace, mgf1_xor};
pub use primitives::{COUNTER_WIDTH, checked_length, i2osp, os2ip};
pub use trace::{DerivationTrace, TraceEvent, log_trace, trace_fn};

// The hash registry is part of every signature here
pub use isokdf_hashing::HashAlgorithm;
