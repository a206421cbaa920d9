//! Traits at the seams with external collaborators.

pub mod cancellation;
pub mod harness;
pub mod loss;

pub use cancellation::{Cancellable, CancellationToken};
pub use harness::{AggregateFn, QuestionLoss, QuestionScore, ScoringHarness};
pub use loss::LossFunction;
