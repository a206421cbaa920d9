use chrono::{Duration, TimeZone, Utc};
use iqisa_aggregation::method::*;
use iqisa_aggregation::transforms::{center, encoding, extremize};
use iqisa_aggregation::{Aggregator, MethodCatalog};
use iqisa_core::errors::AggregationError;
use iqisa_core::config::AggregationConfig;
use iqisa_core::{ForecastGroup, ForecastRecord};
use proptest::prelude::*;

fn group(probabilities: &[f64]) -> ForecastGroup {
    let t0 = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    ForecastGroup::from_probabilities("prop", probabilities, t0)
}

fn arb_method() -> impl Strategy<Value = MethodConfig> {
    let catalog = MethodCatalog::new();
    (0..catalog.len()).prop_map(move |i| *catalog.get(i).unwrap())
}

// ── Identical forecasts survive the encode/center/decode round trip ─────

proptest! {
    #[test]
    fn identical_forecasts_aggregate_to_themselves(
        p in 0.001f64..0.999,
        n in 1usize..20,
    ) {
        let agg = Aggregator::new();
        let g = group(&vec![p; n]);
        let catalog = MethodCatalog::from_axes(
            Center::ALL,
            Encoding::ALL,
            &[Decay::None],
            &[Extremize::None],
        );
        for m in &catalog {
            let out = agg.aggregate(m, &g).unwrap().unwrap();
            prop_assert!((out - p).abs() < 1e-9, "{}: {} != {}", m, out, p);
        }
    }
}

// ── Encode/decode round trip ─────────────────────────────────────────────

proptest! {
    #[test]
    fn odds_round_trip(p in 1e-6f64..(1.0 - 1e-6)) {
        for enc in [Encoding::Odds, Encoding::LogOdds] {
            let back = encoding::decode(encoding::encode(p, enc).unwrap(), enc);
            prop_assert!((back - p).abs() < 1e-9, "{}: {} != {}", enc, back, p);
        }
    }
}

// ── GJP extremizing sharpens ─────────────────────────────────────────────

proptest! {
    #[test]
    fn gjp_pushes_away_from_one_half(p in 0.0f64..=1.0, k in 1.0f64..6.0) {
        let out = extremize::gjp(p, k);
        prop_assert!((out - 0.5).abs() >= (p - 0.5).abs() - 1e-12);
        prop_assert!((0.0..=1.0).contains(&out));
        // Same side of 0.5.
        prop_assert!((out - 0.5) * (p - 0.5) >= 0.0);
    }

    #[test]
    fn gjp_fixed_point_is_one_half(k in 0.1f64..10.0) {
        prop_assert_eq!(extremize::gjp(0.5, k), 0.5);
    }
}

// ── Empty groups are undefined, never errors ────────────────────────────

proptest! {
    #[test]
    fn empty_group_is_undefined(m in arb_method()) {
        let agg = Aggregator::new();
        prop_assert_eq!(agg.aggregate(&m, &group(&[])), Ok(None));
    }
}

// ── Ney with one forecast fails ──────────────────────────────────────────

proptest! {
    #[test]
    fn ney_singleton_fails(p in 0.01f64..0.99) {
        let agg = Aggregator::new();
        let catalog = MethodCatalog::from_axes(
            Center::ALL,
            Encoding::ALL,
            Decay::ALL,
            &[Extremize::Ney],
        );
        for m in &catalog {
            prop_assert_eq!(
                agg.aggregate(m, &group(&[p])),
                Err(AggregationError::DegenerateGroupSize { n: 1 })
            );
        }
    }
}

// ── Geometric mean rejects non-positive inputs ───────────────────────────

proptest! {
    #[test]
    fn geometric_rejects_non_positive(
        values in prop::collection::vec(0.01f64..10.0, 0..8),
        bad in -10.0f64..=0.0,
        at in 0usize..8,
    ) {
        let mut values = values;
        let at = at.min(values.len());
        values.insert(at, bad);
        let is_non_positive = matches!(
            center::geometric_mean(&values),
            Err(AggregationError::NonPositiveGeometricInput { .. })
        );
        prop_assert!(is_non_positive);
    }
}

// ── Results stay in [0, 1] ───────────────────────────────────────────────

proptest! {
    #[test]
    fn aggregates_are_probabilities(
        m in arb_method(),
        ps in prop::collection::vec(0.01f64..0.99, 2..30),
    ) {
        let agg = Aggregator::new();
        let out = agg.aggregate(&m, &group(&ps)).unwrap().unwrap();
        prop_assert!((0.0..=1.0).contains(&out), "{}: {}", m, out);
    }
}

// ── Extreme exponents and long decay windows stay finite ────────────────

proptest! {
    #[test]
    fn aggregates_stay_finite_under_extreme_settings(
        m in arb_method(),
        forecasts in prop::collection::vec((0.01f64..0.99, 0i64..2000), 2..30),
        k in 0.1f64..5000.0,
    ) {
        let t0 = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let records = forecasts
            .iter()
            .map(|&(p, days)| ForecastRecord::new(p, t0).with_suspend_time(t0 + Duration::days(days)))
            .collect();
        let agg = Aggregator::with_config(AggregationConfig {
            extremize_exponent: k,
            ..AggregationConfig::default()
        });
        match agg.aggregate(&m, &ForecastGroup::new("prop", records)) {
            Ok(Some(p)) => prop_assert!((0.0..=1.0).contains(&p), "{}: {}", m, p),
            Ok(None) => prop_assert!(false, "{}: non-empty group was undefined", m),
            Err(err) => prop_assert!(
                !matches!(err, AggregationError::NonFiniteAggregate { .. }),
                "{}: {}", m, err
            ),
        }
    }
}

// ── Catalog constraints ──────────────────────────────────────────────────

#[test]
fn catalog_has_no_incompatible_methods() {
    for m in &MethodCatalog::new() {
        assert!(!(m.encoding() == Encoding::LogOdds && m.center() != Center::Median));
        assert!(!(m.decay() == Decay::Exponential && m.center() != Center::Arithmetic));
    }
}
