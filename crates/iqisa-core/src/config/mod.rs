//! Configuration for iqisa.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod aggregation_config;
pub mod defaults;
pub mod evaluation_config;
pub mod iqisa_config;

pub use aggregation_config::AggregationConfig;
pub use evaluation_config::EvaluationConfig;
pub use iqisa_config::IqisaConfig;
