//! Central-tendency estimators over encoded forecasts.

use iqisa_core::errors::AggregationError;

/// `Σ(w·x) / Σw`.
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> Result<f64, AggregationError> {
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return Err(AggregationError::ZeroWeightSum);
    }
    let weighted: f64 = values.iter().zip(weights).map(|(x, w)| x * w).sum();
    Ok(weighted / total)
}

/// Unweighted geometric mean, computed in log space. All values must be positive.
///
/// `Ok(None)` for empty input.
pub fn geometric_mean(values: &[f64]) -> Result<Option<f64>, AggregationError> {
    if values.is_empty() {
        return Ok(None);
    }
    let mut log_sum = 0.0;
    for &v in values {
        if v <= 0.0 || v.is_nan() {
            return Err(AggregationError::NonPositiveGeometricInput { value: v });
        }
        log_sum += v.ln();
    }
    Ok(Some((log_sum / values.len() as f64).exp()))
}

/// Unweighted median; the mean of the two middle values for even counts.
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    match sorted.len() {
        0 => None,
        len if len % 2 == 0 => Some((sorted[mid - 1] + sorted[mid]) / 2.0),
        _ => Some(sorted[mid]),
    }
}
