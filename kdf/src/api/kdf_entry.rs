//! Entry point for the fluent derivation API

use super::kdf_builder::KdfBuilder;
use crate::KdfFunction;

/// Entry point for derivation operations
pub struct Kdf;

impl Kdf {
    /// Use ISO 18033 KDF1
    #[must_use]
    pub fn kdf1() -> KdfBuilder {
        KdfBuilder::new(KdfFunction::Kdf1)
    }

    /// Use ISO 18033 KDF2
    #[must_use]
    pub fn kdf2() -> KdfBuilder {
        KdfBuilder::new(KdfFunction::Kdf2)
    }

    /// Use ISO 18033 KDF3 (64-octet counter unless overridden)
    #[must_use]
    pub fn kdf3() -> KdfBuilder {
        KdfBuilder::new(KdfFunction::Kdf3)
    }

    /// Use the ChaCha20-based KDF4
    #[must_use]
    pub fn kdf4() -> KdfBuilder {
        KdfBuilder::new(KdfFunction::Kdf4)
    }

    /// Use PKCS#1 MGF1
    #[must_use]
    pub fn mgf1() -> KdfBuilder {
        KdfBuilder::new(KdfFunction::Mgf1)
    }
}
