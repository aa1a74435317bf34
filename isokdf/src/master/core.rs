//! Core Master Builder

use super::KdfMasterBuilder;

/// Master builder providing the unified entry point
pub struct Isokdf;

impl Isokdf {
    /// Entry point for derivation operations
    /// Example: `Isokdf::kdf().kdf2().with_hash(HashAlgorithm::Sha256).derive(secret, 32)`
    #[must_use]
    pub fn kdf() -> KdfMasterBuilder {
        KdfMasterBuilder
    }
}
