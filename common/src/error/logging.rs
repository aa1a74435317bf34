//! Structured logging infrastructure
//!
//! Provides env_logger-based logging for binaries and tests. Derivation
//! helpers log metadata only; input and output octets never reach a log line.

use log::{debug, info, warn};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging setup and derivation logging helpers
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs, including per-block traces
    /// - `RUST_LOG=info` - Enable info and above
    /// - `RUST_LOG=isokdf_kdf=trace` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            debug!("Structured logging initialized");
        });
    }

    /// Initialize logging with an explicit default filter
    ///
    /// `RUST_LOG` still wins when it is set.
    pub fn init_with_default(filter: &str) {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
                .format_timestamp_micros()
                .init();
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a completed derivation
    pub fn log_derivation(function: &str, hash: &str, length: usize, blocks: u64) {
        info!("Derivation complete: {function} (hash: {hash}, length: {length}, blocks: {blocks})");
    }

    /// Log a failed derivation without exposing the input
    pub fn log_derivation_failure(function: &str, hash: &str, error: &dyn std::error::Error) {
        warn!(
            "Derivation failed: {function} (hash: {hash}, error_type: {}, reason: {error})",
            std::any::type_name_of_val(error)
        );
    }

    /// Log the outcome of a known-answer vector check
    pub fn log_vector_check(name: &str, passed: bool) {
        if passed {
            info!("Test vector passed: {name}");
        } else {
            warn!("Test vector failed: {name}");
        }
    }
}
