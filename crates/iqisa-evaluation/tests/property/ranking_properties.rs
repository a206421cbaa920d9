use chrono::{TimeZone, Utc};
use iqisa_aggregation::MethodCatalog;
use iqisa_core::{Dataset, ForecastGroup, Outcome};
use iqisa_evaluation::{evaluate, BrierScore, InMemoryHarness};
use proptest::prelude::*;

fn arb_dataset() -> impl Strategy<Value = Dataset> {
    let question = (
        prop::collection::vec(0.01f64..0.99, 0..6),
        prop_oneof![
            Just(Outcome::Yes),
            Just(Outcome::No),
            Just(Outcome::Open),
        ],
    );
    prop::collection::vec(question, 1..8).prop_map(|questions| {
        let t0 = Utc.with_ymd_and_hms(2020, 5, 1, 0, 0, 0).unwrap();
        questions
            .into_iter()
            .enumerate()
            .map(|(i, (ps, outcome))| {
                iqisa_core::ResolvedQuestion::new(
                    ForecastGroup::from_probabilities(format!("q{i}"), &ps, t0),
                    outcome,
                )
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ranking_is_sorted_and_reproducible(dataset in arb_dataset()) {
        let catalog = MethodCatalog::new();
        let first = evaluate(&catalog, &dataset, &InMemoryHarness, &BrierScore).unwrap();
        let second = evaluate(&catalog, &dataset, &InMemoryHarness, &BrierScore).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), catalog.len());

        let ranking = first.ranking();
        for pair in ranking.windows(2) {
            match (pair[0].mean_loss, pair[1].mean_loss) {
                (Some(a), Some(b)) => {
                    prop_assert!(a <= b);
                    if a == b {
                        prop_assert!(pair[0].catalog_index < pair[1].catalog_index);
                    }
                }
                (None, Some(_)) => prop_assert!(false, "unscored method ranked first"),
                _ => {}
            }
        }
        for score in ranking {
            if let Some(loss) = score.mean_loss {
                prop_assert!((0.0..=1.0).contains(&loss));
            }
        }
    }
}
