//! # isokdf - ISO 18033 key derivation
//!
//! KDF1, KDF2 and KDF3 from ISO 18033-2, MGF1 from PKCS#1, and a
//! ChaCha20-based KDF4, behind one builder API.
//!
//! ## Example
//!
//! ```rust
//! use isokdf::{HashAlgorithm, Isokdf};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let secret = b"shared secret";
//!
//! // Synchronous
//! let key = Isokdf::kdf().kdf2().with_hash(HashAlgorithm::Sha256).derive(secret, 32)?;
//!
//! // On tokio's blocking pool
//! let same = Isokdf::kdf()
//!     .kdf2()
//!     .with_hash(HashAlgorithm::Sha256)
//!     .compute(secret.to_vec(), 32)
//!     .await?;
//! assert_eq!(key, same);
//!
//! // With a result handler
//! let hex = Isokdf::kdf()
//!     .mgf1()
//!     .on_result(|result| match result {
//!         Ok(mask) => mask.to_hex(),
//!         Err(e) => format!("derivation error: {e}"),
//!     })
//!     .compute(b"foo".to_vec(), 3)
//!     .await;
//! assert_eq!(hex, "1ac907");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod cli;
mod master;
pub mod vectors;

pub use master::{Isokdf, KdfMasterBuilder};

// === Core Re-exports ===

pub use isokdf_common::{ErrorKind, LoggingTransformer};
pub use isokdf_hashing::{DigestBlock, HashAlgorithm, HashError};

// === Derivation Re-exports ===

pub use isokdf_kdf::{
    AsyncKdfResult, CounterMode, CounterPlacement, DEFAULT_KDF3_COUNTER_WIDTH, DerivationConfig,
    DerivationTrace, DerivedKey, Kdf, KdfBuilder, KdfBuilderWithHandler, KdfError, KdfFunction,
    MIN_KDF3_COUNTER_WIDTH, Result, TraceEvent, checked_length, derive_with_mode, i2osp, kdf1,
    kdf2, kdf3, kdf4, log_trace, mask_limit, mgf1, mgf1_xor, os2ip, trace_fn,
};

pub use vectors::{PUBLISHED, VectorOutcome, run_published};
