//! # iqisa-evaluation
//!
//! Runs every method of a catalog through a scoring harness, reduces the
//! per-question losses to a mean per method, and ranks methods from best
//! (lowest mean loss) to worst.

pub mod evaluator;
pub mod harness;
pub mod loss;
pub mod report;
pub mod tracing_setup;

pub use evaluator::{evaluate, Evaluator};
pub use harness::InMemoryHarness;
pub use loss::{BrierScore, LogScore};
pub use report::{EvaluationReport, MethodScore};
