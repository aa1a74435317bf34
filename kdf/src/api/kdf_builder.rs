//! Derivation builder
//!
//! Usage: `Kdf::kdf2().with_hash(HashAlgorithm::Sha256).derive(secret, 32)`
//! for a synchronous call, or `.compute(secret, 32).await` to run on tokio's
//! blocking pool.

use crate::counter::DEFAULT_KDF3_COUNTER_WIDTH;
use crate::trace::{DerivationTrace, TraceEvent, log_trace};
use crate::{AsyncKdfResult, DerivationConfig, DerivedKey, KdfFunction, Result};
use isokdf_hashing::HashAlgorithm;
use std::sync::Arc;
use tokio::sync::oneshot;
use zeroize::Zeroizing;

/// Builder for one derivation function
#[derive(Clone)]
pub struct KdfBuilder {
    function: KdfFunction,
    hash: HashAlgorithm,
    counter_width: usize,
    trace: Option<DerivationTrace>,
}

/// Builder with a result handler attached
pub struct KdfBuilderWithHandler<F, T> {
    builder: KdfBuilder,
    result_handler: F,
    _phantom: std::marker::PhantomData<T>,
}

impl KdfBuilder {
    /// Create a builder for `function` with SHA-1 and the default KDF3 width
    #[must_use]
    pub fn new(function: KdfFunction) -> Self {
        Self {
            function,
            hash: HashAlgorithm::default(),
            counter_width: DEFAULT_KDF3_COUNTER_WIDTH,
            trace: None,
        }
    }

    /// Create a builder from configuration (the length stays with the caller)
    #[must_use]
    pub fn from_config(config: &DerivationConfig) -> Self {
        Self::new(config.function)
            .with_hash(config.hash)
            .with_counter_width(config.counter_width)
    }

    /// Select the hash algorithm
    #[must_use]
    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash = hash;
        self
    }

    /// Set the KDF3 counter width in octets
    #[must_use]
    pub fn with_counter_width(mut self, width: usize) -> Self {
        if !self.function.uses_counter_width() && width != DEFAULT_KDF3_COUNTER_WIDTH {
            tracing::debug!(
                function = %self.function,
                width,
                "counter width only applies to kdf3; ignoring"
            );
        }
        self.counter_width = width;
        self
    }

    /// Attach a diagnostic hook receiving plan and block events
    #[must_use]
    pub fn with_trace<F>(mut self, trace: F) -> Self
    where
        F: Fn(&TraceEvent) + Send + Sync + 'static,
    {
        self.trace = Some(Arc::new(trace));
        self
    }

    /// Forward plan and block events to `tracing` at debug level
    #[must_use]
    pub fn with_log_trace(mut self) -> Self {
        self.trace = Some(log_trace());
        self
    }

    /// Selected function
    #[must_use]
    pub fn function(&self) -> KdfFunction {
        self.function
    }

    /// Selected hash algorithm
    #[must_use]
    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    /// Configured KDF3 counter width
    #[must_use]
    pub fn counter_width(&self) -> usize {
        self.counter_width
    }

    /// Derive `length` octets from `input` on the current thread
    ///
    /// # Errors
    ///
    /// Propagates the precondition failures of the selected function.
    pub fn derive(&self, input: &[u8], length: usize) -> Result<DerivedKey> {
        let result = self.function.derive(
            input,
            length,
            self.hash,
            self.counter_width,
            self.trace.as_ref(),
        );

        match &result {
            Ok(_) => tracing::debug!(
                function = %self.function,
                hash = %self.hash,
                length,
                "derivation complete"
            ),
            Err(e) => tracing::warn!(
                function = %self.function,
                hash = %self.hash,
                length,
                error = %e,
                "derivation failed"
            ),
        }

        result.map(DerivedKey::new)
    }

    /// Derive on tokio's blocking pool
    ///
    /// Must be called from within a tokio runtime. The moved input is wiped
    /// once the blocking task finishes.
    pub fn compute<T: Into<Vec<u8>>>(self, input: T, length: usize) -> AsyncKdfResult {
        let input = Zeroizing::new(input.into());
        let (tx, rx) = oneshot::channel();

        tokio::task::spawn_blocking(move || {
            let result = self.derive(&input, length);
            let _ = tx.send(result);
        });

        AsyncKdfResult::new(rx)
    }

    /// Add `on_result` handler; `compute` then resolves to the handler's value
    pub fn on_result<F, T>(self, handler: F) -> KdfBuilderWithHandler<F, T>
    where
        F: FnOnce(Result<DerivedKey>) -> T + Send + 'static,
        T: Send + 'static,
    {
        KdfBuilderWithHandler {
            builder: self,
            result_handler: handler,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<F, T> KdfBuilderWithHandler<F, T>
where
    F: FnOnce(Result<DerivedKey>) -> T + Send + 'static,
    T: Send + 'static,
{
    /// Derive and hand the result to the handler
    pub async fn compute<D: Into<Vec<u8>>>(self, input: D, length: usize) -> T {
        let result = self.builder.compute(input, length).await;
        (self.result_handler)(result)
    }
}
