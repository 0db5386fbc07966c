//! Reference scenarios for the rule and the four strategies.
//!
//! Each test pins one concrete behavior through the public crate APIs only.

use digen_kernel::carrier::digits::{decode, encode};
use digen_kernel::operators::rule::{expand, expand_state, sample_state, RuleError};
use digen_kernel::rng::SeededSource;
use digen_search::beam::by_beam;
use digen_search::breadth::in_width;
use digen_search::depth::in_depth;
use digen_search::error::SearchError;
use digen_search::parallel::parallel;
use digen_search::policy::SearchPolicyV1;
use digen_search::strategy::Strategy;

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

#[test]
fn two_digit_start_has_one_neighbor() {
    assert_eq!(expand_state(12).unwrap(), vec![21]);
    let mut source = SeededSource::new(0);
    for _ in 0..32 {
        assert_eq!(sample_state(12, &mut source).unwrap(), 21);
    }
}

#[test]
fn three_digit_start_places_first_digit_in_front() {
    assert_eq!(expand_state(123).unwrap(), vec![132, 213]);
}

#[test]
fn rule_preserves_digit_count() {
    let digits = encode(90_817_263);
    for neighbor in expand(&digits).unwrap() {
        assert_eq!(neighbor.len(), digits.len());
    }
    // A neighbor with a leading zero is a shorter integer.
    assert!(expand_state(90_817_263).unwrap().contains(&8_172_639));
}

#[test]
fn codec_round_trip_at_the_edges() {
    for n in [0, 1, 9, 10, 1020, u64::MAX] {
        assert_eq!(decode(&encode(n)).unwrap(), n);
    }
}

// ---------------------------------------------------------------------------
// Breadth search
// ---------------------------------------------------------------------------

#[test]
fn breadth_reference_values() {
    let policy = SearchPolicyV1::default();
    assert_eq!(in_width(12, 12, &policy).unwrap().iterations, Some(0));
    assert_eq!(in_width(12, 21, &policy).unwrap().iterations, Some(1));
    assert_eq!(in_width(123, 312, &policy).unwrap().iterations, Some(2));
    assert_eq!(in_width(12_345, 54_321, &policy).unwrap().iterations, Some(4));
}

#[test]
fn unreachable_target_hits_frontier_budget() {
    let policy = SearchPolicyV1 {
        max_frontier_len: 10_000,
        ..SearchPolicyV1::default()
    };
    let err = in_width(1020, 2010, &policy).unwrap_err();
    assert!(
        matches!(
            err,
            SearchError::FrontierBudgetExceeded { limit: 10_000, .. }
        ),
        "unexpected error: {err}"
    );
}

#[test]
fn single_digit_start_is_rejected() {
    let policy = SearchPolicyV1::default();
    assert_eq!(
        in_width(7, 12, &policy).unwrap_err(),
        SearchError::Rule(RuleError::DegenerateLength { len: 1 })
    );
}

// ---------------------------------------------------------------------------
// Walks
// ---------------------------------------------------------------------------

#[test]
fn parallel_neighbor_target_is_one_round() {
    let mut source = SeededSource::new(11);
    let batch = parallel(123, 213, 5, &mut source, &SearchPolicyV1::default()).unwrap();
    assert_eq!(batch, vec![1, 1, 1, 1, 1]);
}

#[test]
fn walks_record_zero_when_start_is_target() {
    let policy = SearchPolicyV1::default();
    let mut source = SeededSource::new(5);
    assert_eq!(in_depth(4321, 4321, 4, &mut source, &policy).unwrap(), vec![0; 4]);
    assert_eq!(by_beam(4321, 4321, 4, &mut source, &policy).unwrap(), vec![0; 4]);
    assert_eq!(parallel(4321, 4321, 4, &mut source, &policy).unwrap(), vec![0; 4]);
}

#[test]
fn walks_record_positive_counts_otherwise() {
    let policy = SearchPolicyV1::default();
    let mut source = SeededSource::new(8);
    let depth = in_depth(12_345, 54_321, 12, &mut source, &policy).unwrap();
    let beam = by_beam(12_345, 54_321, 12, &mut source, &policy).unwrap();
    let along = parallel(12_345, 54_321, 12, &mut source, &policy).unwrap();
    for batch in [&depth, &beam, &along] {
        assert_eq!(batch.len(), 12);
        assert!(batch.iter().all(|&n| n >= 1), "non-positive count in {batch:?}");
    }
}

#[test]
fn depth_never_beats_breadth() {
    let policy = SearchPolicyV1::default();
    let shortest = in_width(1234, 4321, &policy).unwrap().iterations.unwrap();
    let mut source = SeededSource::new(21);
    let depth = in_depth(1234, 4321, 20, &mut source, &policy).unwrap();
    assert!(depth.iter().all(|&n| n >= shortest));
}

#[test]
fn stranded_walk_is_a_dead_end() {
    let mut source = SeededSource::new(1);
    let err = by_beam(10, 99, 1, &mut source, &SearchPolicyV1::default()).unwrap_err();
    assert_eq!(
        err,
        SearchError::DeadEnd {
            strategy: Strategy::Beam,
            trial: 0,
            state: 1
        }
    );
}

#[test]
fn unreachable_walk_hits_iteration_budget() {
    let policy = SearchPolicyV1 {
        max_iterations: 500,
        ..SearchPolicyV1::default()
    };
    let mut source = SeededSource::new(2);
    let err = in_depth(1020, 2010, 1, &mut source, &policy).unwrap_err();
    assert!(matches!(
        err,
        SearchError::IterationBudgetExceeded {
            trial: Some(0),
            limit: 500,
            ..
        }
    ));
}
