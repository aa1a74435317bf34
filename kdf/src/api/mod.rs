//! Fluent derivation API
//!
//! Usage: `Kdf::kdf1().with_hash(HashAlgorithm::Sha1).derive(secret, 32)`

pub mod kdf_builder;
pub mod kdf_entry;

pub use kdf_builder::{KdfBuilder, KdfBuilderWithHandler};
pub use kdf_entry::Kdf;
