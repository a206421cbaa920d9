//! Time-to-resolution decay weights.

use iqisa_core::config::AggregationConfig;
use iqisa_core::errors::AggregationError;
use iqisa_core::forecast::ForecastRecord;

use crate::method::Decay;

/// Weight of each record.
///
/// Exponential decay gives `base ^ (live_seconds / period)`, so with the
/// defaults a forecast loses 1% of its weight per day it stayed live before
/// suspension. If any record lacks a suspend time the whole group falls back
/// to uniform weights.
///
/// Under exponential decay a record suspended before it was made is rejected,
/// since its weight would exceed 1 without bound.
pub fn compute(
    records: &[ForecastRecord],
    decay: Decay,
    config: &AggregationConfig,
) -> Result<Vec<f64>, AggregationError> {
    if decay == Decay::None {
        return Ok(vec![1.0; records.len()]);
    }

    let live: Vec<Option<f64>> = records.iter().map(ForecastRecord::live_seconds).collect();
    if let Some(secs) = live.iter().flatten().find(|&&secs| secs < 0.0) {
        return Err(AggregationError::SuspendedBeforeForecast { seconds: -secs });
    }

    let weights = match live.into_iter().collect::<Option<Vec<f64>>>() {
        Some(live) => live
            .into_iter()
            .map(|secs| config.decay_base.powf(secs / config.decay_period_secs))
            .collect(),
        None => vec![1.0; records.len()],
    };
    Ok(weights)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    #[test]
    fn one_day_live_costs_one_percent() {
        let t0 = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let records = vec![
            ForecastRecord::new(0.5, t0).with_suspend_time(t0 + Duration::days(1)),
            ForecastRecord::new(0.5, t0).with_suspend_time(t0),
        ];
        let w = compute(&records, Decay::Exponential, &AggregationConfig::default()).unwrap();
        assert!((w[0] - 0.99).abs() < 1e-12);
        assert_eq!(w[1], 1.0);
    }

    #[test]
    fn missing_suspend_time_means_uniform() {
        let t0 = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let records = vec![
            ForecastRecord::new(0.5, t0).with_suspend_time(t0 + Duration::days(30)),
            ForecastRecord::new(0.5, t0),
        ];
        let w = compute(&records, Decay::Exponential, &AggregationConfig::default()).unwrap();
        assert_eq!(w, vec![1.0, 1.0]);
    }

    #[test]
    fn suspension_before_forecast_is_rejected() {
        let t0 = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let records = vec![
            ForecastRecord::new(0.5, t0),
            ForecastRecord::new(0.5, t0 + Duration::days(2)).with_suspend_time(t0),
        ];
        let config = AggregationConfig::default();
        assert_eq!(
            compute(&records, Decay::Exponential, &config),
            Err(AggregationError::SuspendedBeforeForecast { seconds: 172_800.0 })
        );
        // Undecayed methods never read the suspend time.
        assert_eq!(compute(&records, Decay::None, &config), Ok(vec![1.0, 1.0]));
    }
}
