//! Cooperative cancellation token.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Checked by the evaluator before it starts scoring each method.
///
/// Methods already being scored run to completion; methods not yet started
/// are abandoned and the report is marked cancelled.
pub trait Cancellable {
    /// Whether an evaluation run should stop picking up new methods.
    fn is_cancelled(&self) -> bool;

    /// Ask the run to stop. Idempotent.
    fn cancel(&self);
}

/// Shared flag backed by an `AtomicBool`. Clones observe the same flag.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// A token that has not been cancelled.
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}
