//! Master builder for all isokdf operations

pub mod core;
pub mod kdf;

pub use self::core::Isokdf;
pub use kdf::KdfMasterBuilder;
