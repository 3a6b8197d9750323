//! Comprehensive property-based tests for veredicto
//!
//! Following ruchy/trueno/aprender pattern:
//! - Test mathematical invariants
//! - Test data integrity properties
//! - Run with ProptestConfig::with_cases(100)
//! - Must complete in <30 seconds for pre-commit hook

use proptest::prelude::*;
use veredicto::experiment::{classify, Experiment, ExperimentMetrics, ExperimentStatus};
use veredicto::identity::UserId;

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

/// Finite observed/target values in a realistic business-metric range
fn arb_value() -> impl Strategy<Value = f64> {
    -1.0e9..1.0e9f64
}

fn arb_status() -> impl Strategy<Value = ExperimentStatus> {
    prop_oneof![
        Just(ExperimentStatus::Active),
        Just(ExperimentStatus::Shipped),
        Just(ExperimentStatus::Killed),
    ]
}

/// Generate an experiment collection with arbitrary statuses
fn arb_experiments(max: usize) -> impl Strategy<Value = Vec<Experiment>> {
    proptest::collection::vec(arb_status(), 0..max).prop_map(|statuses| {
        statuses
            .into_iter()
            .enumerate()
            .map(|(i, status)| {
                let builder = Experiment::builder(
                    format!("exp-{i:06}"),
                    UserId::new("owner"),
                    format!("experiment {i}"),
                    "hypothesis",
                    "metric",
                    100.0,
                );
                match status {
                    ExperimentStatus::Active => builder.build(),
                    ExperimentStatus::Shipped => builder.result(100.0, status).build(),
                    ExperimentStatus::Killed => builder.result(0.0, status).build(),
                }
            })
            .collect()
    })
}

// ============================================================================
// Decision rule invariants
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_classify_is_total_and_two_valued(observed in arb_value(), target in arb_value()) {
        let status = classify(observed, target);
        prop_assert!(status == ExperimentStatus::Shipped || status == ExperimentStatus::Killed);
    }

    #[test]
    fn prop_meeting_target_ships(observed in arb_value(), target in arb_value()) {
        prop_assume!(observed >= target);
        prop_assert_eq!(classify(observed, target), ExperimentStatus::Shipped);
    }

    #[test]
    fn prop_missing_target_kills(observed in arb_value(), target in arb_value()) {
        prop_assume!(observed < target);
        prop_assert_eq!(classify(observed, target), ExperimentStatus::Killed);
    }

    #[test]
    fn prop_tie_on_target_ships(target in arb_value()) {
        prop_assert_eq!(classify(target, target), ExperimentStatus::Shipped);
    }

    #[test]
    fn prop_classify_is_deterministic(observed in arb_value(), target in arb_value()) {
        prop_assert_eq!(classify(observed, target), classify(observed, target));
    }
}

// ============================================================================
// Aggregator invariants
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_counts_partition_the_total(experiments in arb_experiments(50)) {
        let metrics = ExperimentMetrics::from_experiments(&experiments);
        prop_assert_eq!(metrics.total, experiments.len());
        prop_assert_eq!(metrics.shipped + metrics.killed + metrics.active, metrics.total);
    }

    #[test]
    fn prop_percentages_stay_in_range(experiments in arb_experiments(50)) {
        let metrics = ExperimentMetrics::from_experiments(&experiments);
        prop_assert!(metrics.shipped_percentage <= 100);
        prop_assert!(metrics.killed_percentage <= 100);
    }

    #[test]
    fn prop_all_shipped_is_100_percent(count in 1usize..50) {
        let experiments: Vec<Experiment> = (0..count)
            .map(|i| {
                Experiment::builder(
                    format!("exp-{i:06}"),
                    UserId::new("owner"),
                    format!("experiment {i}"),
                    "hypothesis",
                    "metric",
                    100.0,
                )
                .result(100.0, ExperimentStatus::Shipped)
                .build()
            })
            .collect();
        let metrics = ExperimentMetrics::from_experiments(&experiments);
        prop_assert_eq!(metrics.shipped_percentage, 100);
        prop_assert_eq!(metrics.killed_percentage, 0);
    }
}

#[test]
fn test_empty_collection_yields_zero_percentages() {
    let metrics = ExperimentMetrics::from_experiments(&[]);
    assert_eq!(metrics.shipped_percentage, 0);
    assert_eq!(metrics.killed_percentage, 0);
}
