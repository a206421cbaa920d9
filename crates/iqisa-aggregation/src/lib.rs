//! # iqisa-aggregation
//!
//! Combines the time-stamped probability forecasts of one question into a
//! single consensus probability.
//! Pipeline: pre-extremize → decay weights → encode → center → decode → post-extremize.
//! The catalog enumerates every compatible combination of the four method axes.

pub mod catalog;
pub mod engine;
pub mod method;
pub mod transforms;

pub use catalog::MethodCatalog;
pub use engine::Aggregator;
pub use method::{Center, Decay, Encoding, Extremize, MethodConfig};
