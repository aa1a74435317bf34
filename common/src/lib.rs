//! Common infrastructure shared by the isokdf crates
//!
//! This crate provides:
//! - A coarse error taxonomy (`ErrorKind`) every crate-level error maps onto
//! - `env_logger` based logging setup for binaries and tests

#![forbid(unsafe_code)]

pub mod error;

pub use error::{ErrorKind, LoggingTransformer};
