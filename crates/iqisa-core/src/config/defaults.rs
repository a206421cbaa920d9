use crate::constants;

pub const DEFAULT_EXTREMIZE_EXPONENT: f64 = constants::DEFAULT_EXTREMIZE_EXPONENT;
pub const DEFAULT_DECAY_BASE: f64 = constants::DEFAULT_DECAY_BASE;
pub const DEFAULT_DECAY_PERIOD_SECS: f64 = constants::DEFAULT_DECAY_PERIOD_SECS;
pub const DEFAULT_NORMALIZE: bool = true;
pub const DEFAULT_PARALLEL: bool = true;
