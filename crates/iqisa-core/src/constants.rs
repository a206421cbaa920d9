/// iqisa version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds in one day, the unit of the decay exponent.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Default extremizing exponent `k`.
pub const DEFAULT_EXTREMIZE_EXPONENT: f64 = 3.0;

/// Default per-day decay base for time-to-resolution weighting.
pub const DEFAULT_DECAY_BASE: f64 = 0.99;

/// Default decay period (seconds) that one application of the base covers.
pub const DEFAULT_DECAY_PERIOD_SECS: f64 = SECONDS_PER_DAY;

/// Floor applied to probabilities before taking logarithms in log scoring.
pub const LOG_SCORE_EPSILON: f64 = 1e-15;

/// Environment variable that controls tracing filters.
pub const LOG_ENV_VAR: &str = "IQISA_LOG";
