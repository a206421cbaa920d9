use iqisa_aggregation::method::*;
use iqisa_aggregation::MethodCatalog;

#[test]
fn full_catalog_has_forty_five_methods() {
    // arith: 2 encodings × 2 decays × 5, geom: 2 × 1 × 5, median: 3 × 1 × 5
    let catalog = MethodCatalog::new();
    assert_eq!(catalog.len(), 20 + 10 + 15);
    assert!(!catalog.is_empty());
}

#[test]
fn catalog_excludes_incompatible_combinations() {
    for m in &MethodCatalog::new() {
        if m.encoding() == Encoding::LogOdds {
            assert_eq!(m.center(), Center::Median, "{m}");
        }
        if m.decay() == Decay::Exponential {
            assert_eq!(m.center(), Center::Arithmetic, "{m}");
        }
    }
}

#[test]
fn catalog_order_is_outer_to_inner() {
    let catalog = MethodCatalog::new();
    let labels: Vec<String> = catalog.iter().map(MethodConfig::label).collect();
    assert_eq!(labels[0], "arith_probs_nodec_gjpextr");
    assert_eq!(labels[4], "arith_probs_nodec_noextr");
    assert_eq!(labels[5], "arith_probs_dec_gjpextr");
    assert_eq!(labels[10], "arith_odds_nodec_gjpextr");
    assert_eq!(labels[20], "geom_probs_nodec_gjpextr");
    assert_eq!(labels[44], "median_logodds_nodec_noextr");
}

#[test]
fn every_method_appears_exactly_once() {
    let catalog = MethodCatalog::new();
    let mut labels: Vec<String> = catalog.iter().map(MethodConfig::label).collect();
    labels.sort();
    labels.dedup();
    assert_eq!(labels.len(), catalog.len());
}

#[test]
fn catalog_is_deterministic() {
    assert_eq!(MethodCatalog::new(), MethodCatalog::new());
}

#[test]
fn from_axes_restricts_and_dedups() {
    let catalog = MethodCatalog::from_axes(
        &[Center::Geometric, Center::Arithmetic, Center::Geometric],
        &[Encoding::LogOdds, Encoding::Raw],
        &[Decay::Exponential],
        &[Extremize::None],
    );
    // Only arith_probs_dec_noextr survives.
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(0).unwrap().label(), "arith_probs_dec_noextr");
}

#[test]
fn from_axes_with_empty_axis_is_empty() {
    let catalog = MethodCatalog::from_axes(Center::ALL, Encoding::ALL, &[], Extremize::ALL);
    assert!(catalog.is_empty());
}

#[test]
fn position_finds_enumeration_index() {
    let catalog = MethodCatalog::new();
    let m: MethodConfig = "median_odds_nodec_neyextr".parse().unwrap();
    let idx = catalog.position(&m).unwrap();
    assert_eq!(catalog.get(idx), Some(&m));
}

#[test]
fn method_serializes_as_label() {
    let m: MethodConfig = "arith_odds_dec_postextr".parse().unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, "\"arith_odds_dec_postextr\"");
    let back: MethodConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
    assert!(serde_json::from_str::<MethodConfig>("\"geom_probs_dec_noextr\"").is_err());
}
