//! KDF Master Builder
//!
//! Master builder for the ISO 18033 functions, MGF1 and KDF4

use isokdf_kdf::{DerivationConfig, Kdf, KdfBuilder};

/// Master builder for derivation operations
pub struct KdfMasterBuilder;

impl KdfMasterBuilder {
    /// Use ISO 18033 KDF1
    #[must_use]
    pub fn kdf1(self) -> KdfBuilder {
        Kdf::kdf1()
    }

    /// Use ISO 18033 KDF2
    #[must_use]
    pub fn kdf2(self) -> KdfBuilder {
        Kdf::kdf2()
    }

    /// Use ISO 18033 KDF3
    #[must_use]
    pub fn kdf3(self) -> KdfBuilder {
        Kdf::kdf3()
    }

    /// Use the ChaCha20-based KDF4
    #[must_use]
    pub fn kdf4(self) -> KdfBuilder {
        Kdf::kdf4()
    }

    /// Use PKCS#1 MGF1
    #[must_use]
    pub fn mgf1(self) -> KdfBuilder {
        Kdf::mgf1()
    }

    /// Build from a configuration document
    #[must_use]
    pub fn from_config(self, config: &DerivationConfig) -> KdfBuilder {
        KdfBuilder::from_config(config)
    }
}
