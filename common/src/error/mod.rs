//! Error classification and logging
//!
//! Each crate owns its own `thiserror` enum; this module holds the pieces
//! they have in common.

pub mod logging;
pub mod types;

pub use logging::LoggingTransformer;
pub use types::ErrorKind;
