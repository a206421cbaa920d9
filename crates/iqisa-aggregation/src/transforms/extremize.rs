//! Extremizing transforms.

use iqisa_core::errors::AggregationError;

use super::logistic;

/// GJP extremizing: `p^k / (p^k + (1-p)^k)`.
///
/// 0.5 is a fixed point; for `k > 1` every other probability moves away from it.
/// Evaluated as `logistic(k · logit(p))`, which stays finite where both
/// powers would underflow.
pub fn gjp(p: f64, k: f64) -> f64 {
    let logit = (p / (1.0 - p)).ln();
    logistic(k * logit)
}

/// `p^k`. Not renormalized against `(1-p)^k`, so it shrinks every
/// probability and is not calibrated for large `k`.
pub fn post(p: f64, k: f64) -> f64 {
    p.powf(k)
}

/// Exponent for the group-size-dependent extremizer:
/// `d = n(√(3n² − 3n + 1) − 2) / (n² − n − 1)`.
///
/// Undefined below two forecasts.
pub fn ney_exponent(n: usize) -> Result<f64, AggregationError> {
    if n < 2 {
        return Err(AggregationError::DegenerateGroupSize { n });
    }
    let n = n as f64;
    Ok(n * ((3.0 * n * n - 3.0 * n + 1.0).sqrt() - 2.0) / (n * n - n - 1.0))
}

/// `p^d` with `d` from [`ney_exponent`].
pub fn ney(p: f64, n: usize) -> Result<f64, AggregationError> {
    Ok(p.powf(ney_exponent(n)?))
}
