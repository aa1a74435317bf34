//! Async derivation result

use crate::{DerivedKey, KdfError, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Pending derivation running on the blocking pool
pub struct AsyncKdfResult {
    receiver: oneshot::Receiver<Result<DerivedKey>>,
}

impl AsyncKdfResult {
    /// Create a new `AsyncKdfResult` from a oneshot receiver
    pub(crate) fn new(receiver: oneshot::Receiver<Result<DerivedKey>>) -> Self {
        Self { receiver }
    }

    /// Create an `AsyncKdfResult` that's already completed
    #[must_use]
    pub fn ready(result: Result<DerivedKey>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }

    /// Create an `AsyncKdfResult` that yields an error
    #[must_use]
    pub fn error(error: KdfError) -> Self {
        Self::ready(Err(error))
    }
}

impl Future for AsyncKdfResult {
    type Output = Result<DerivedKey>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(KdfError::internal("Derivation task dropped"))),
            Poll::Pending => Poll::Pending,
        }
    }
}
