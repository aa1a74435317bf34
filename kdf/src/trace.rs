//! Optional diagnostic hook for derivations
//!
//! A derivation never writes anywhere on its own. Callers that want to see
//! the block plan and the per-counter progress inject a [`DerivationTrace`].

use crate::KdfFunction;
use isokdf_hashing::HashAlgorithm;
use std::sync::Arc;

/// Progress reported while a derivation runs
///
/// Events carry counters and lengths only, never input or output octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// Emitted once before the first block
    Plan {
        /// Function being evaluated
        function: KdfFunction,
        /// Hash algorithm in use
        hash: HashAlgorithm,
        /// Requested output length in octets
        length: usize,
        /// Number of blocks that will be computed
        blocks: u64,
    },
    /// Emitted after each block is appended
    Block {
        /// Counter value hashed for this block
        counter: u64,
        /// Octets of output available so far (capped at the requested length)
        produced: usize,
    },
}

/// Caller-supplied trace callback
pub type DerivationTrace = Arc<dyn Fn(&TraceEvent) + Send + Sync>;

/// Build a trace from a closure
pub fn trace_fn<F>(f: F) -> DerivationTrace
where
    F: Fn(&TraceEvent) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Trace that forwards every event to `tracing` at debug level
#[must_use]
pub fn log_trace() -> DerivationTrace {
    Arc::new(|event: &TraceEvent| match *event {
        TraceEvent::Plan {
            function,
            hash,
            length,
            blocks,
        } => tracing::debug!(%function, %hash, length, blocks, "derivation plan"),
        TraceEvent::Block { counter, produced } => {
            tracing::debug!(counter, produced, "derivation block");
        }
    })
}

pub(crate) fn emit(trace: Option<&DerivationTrace>, event: TraceEvent) {
    if let Some(trace) = trace {
        trace(&event);
    }
}
