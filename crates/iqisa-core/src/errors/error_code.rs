//! Stable error codes, used to tally failures in evaluation reports.

/// Every error enum maps each variant to a stable code string.
pub trait IqisaErrorCode {
    /// Returns the code (e.g. `"DOMAIN_ZERO_WEIGHT_SUM"`).
    fn error_code(&self) -> &'static str;

    /// Returns `[CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const DOMAIN_INVALID_PROBABILITY: &str = "DOMAIN_INVALID_PROBABILITY";
pub const DOMAIN_BOUNDARY_PROBABILITY: &str = "DOMAIN_BOUNDARY_PROBABILITY";
pub const DOMAIN_ZERO_WEIGHT_SUM: &str = "DOMAIN_ZERO_WEIGHT_SUM";
pub const DOMAIN_NON_POSITIVE_GEOMETRIC: &str = "DOMAIN_NON_POSITIVE_GEOMETRIC";
pub const DOMAIN_DEGENERATE_GROUP_SIZE: &str = "DOMAIN_DEGENERATE_GROUP_SIZE";
pub const DOMAIN_SUSPENDED_BEFORE_FORECAST: &str = "DOMAIN_SUSPENDED_BEFORE_FORECAST";
pub const DOMAIN_NON_FINITE_AGGREGATE: &str = "DOMAIN_NON_FINITE_AGGREGATE";
pub const CONFIGURATION_ERROR: &str = "CONFIGURATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EMPTY_CATALOG: &str = "EMPTY_CATALOG";
