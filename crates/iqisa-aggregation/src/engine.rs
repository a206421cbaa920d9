//! Aggregator: maps (method, forecast group) to one probability.

use iqisa_core::config::AggregationConfig;
use iqisa_core::errors::{AggregateResult, AggregationError};
use iqisa_core::forecast::ForecastGroup;

use crate::catalog::MethodCatalog;
use crate::method::{is_compatible, Center, Extremize, MethodConfig};
use crate::transforms::{center, check_probability, encoding, extremize, weights};

/// Stateless aggregator. The only parameters are the shared numeric
/// settings (extremizing exponent, decay base and period).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aggregator {
    config: AggregationConfig,
}

impl Aggregator {
    /// Aggregator with the default parameters (`k = 3`, 0.99 per day).
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregator with caller-supplied parameters. Validation is the
    /// caller's job (see `IqisaConfig::validate`).
    pub fn with_config(config: AggregationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Extremizing exponent `k`.
    pub fn exponent(&self) -> f64 {
        self.config.extremize_exponent
    }

    /// Aggregate one group under `method`.
    ///
    /// Returns `Ok(None)` for an empty group. A result that is not a finite
    /// number is reported as [`AggregationError::NonFiniteAggregate`].
    pub fn aggregate(&self, method: &MethodConfig, group: &ForecastGroup) -> AggregateResult {
        debug_assert!(
            is_compatible(method.center(), method.encoding(), method.decay()),
            "incompatible method reached the aggregator: {method}"
        );

        let n = group.len();
        if n == 0 {
            return Ok(None);
        }
        let k = self.config.extremize_exponent;

        // Step 1: per-forecast extremizing.
        let probabilities = group
            .probabilities()
            .map(|p| -> Result<f64, AggregationError> {
                let p = check_probability(p)?;
                Ok(match method.extremize() {
                    Extremize::Before => extremize::gjp(p, k),
                    _ => p,
                })
            })
            .collect::<Result<Vec<f64>, AggregationError>>()?;

        // Step 2: decay weights.
        let weights = weights::compute(&group.records, method.decay(), &self.config)?;

        // Step 3: encode.
        let encoded = probabilities
            .iter()
            .map(|&p| encoding::encode(p, method.encoding()))
            .collect::<Result<Vec<f64>, AggregationError>>()?;

        // Step 4: center.
        let aggregate = match method.center() {
            Center::Arithmetic => Some(center::weighted_mean(&encoded, &weights)?),
            Center::Geometric => center::geometric_mean(&encoded)?,
            Center::Median => center::median(&encoded),
        };
        let Some(aggregate) = aggregate else {
            return Ok(None);
        };
        if !aggregate.is_finite() {
            return Err(AggregationError::NonFiniteAggregate { value: aggregate });
        }

        // Step 5: decode.
        let p = encoding::decode(aggregate, method.encoding());

        // Step 6: aggregate-level extremizing.
        let p = match method.extremize() {
            Extremize::Gjp => extremize::gjp(p, k),
            Extremize::Post => extremize::post(p, k),
            Extremize::Ney => extremize::ney(p, n)?,
            Extremize::Before | Extremize::None => p,
        };
        if !p.is_finite() {
            return Err(AggregationError::NonFiniteAggregate { value: p });
        }

        Ok(Some(p))
    }

    /// Bind a method, yielding a `(group) -> result` callable for a scoring harness.
    pub fn bind<'a>(
        &'a self,
        method: &'a MethodConfig,
    ) -> impl Fn(&ForecastGroup) -> AggregateResult + Sync + 'a {
        move |group: &ForecastGroup| self.aggregate(method, group)
    }

    /// Aggregate one group under every method of `catalog`, in catalog order.
    pub fn aggregate_all(
        &self,
        catalog: &MethodCatalog,
        group: &ForecastGroup,
    ) -> Vec<(MethodConfig, AggregateResult)> {
        catalog
            .iter()
            .map(|method| (*method, self.aggregate(method, group)))
            .collect()
    }
}
