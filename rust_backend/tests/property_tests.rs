//! Property tests for the invariants of each exercise.

use kata_rust::algorithms::{longest_increasing_run, longest_increasing_span};
use kata_rust::threat::{generate_bounded_samples_with, weighted_aggregate_score, SampleRange};
use kata_rust::time::{circular_hour_difference, hour_to_cyclic_point, HourOfDay};
use kata_rust::KataError;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn run_length_bounded_by_input(values in prop::collection::vec(-1000i64..1000, 0..200)) {
        let run = longest_increasing_run(&values);
        prop_assert!(run <= values.len());
        prop_assert_eq!(run == 0, values.is_empty());
    }

    #[test]
    fn span_matches_run_length(values in prop::collection::vec(-50i32..50, 0..100)) {
        let run = longest_increasing_run(&values);
        match longest_increasing_span(&values) {
            None => prop_assert_eq!(run, 0),
            Some(span) => {
                prop_assert_eq!(span.len(), run);
                prop_assert!(values[span].windows(2).all(|w| w[1] > w[0]));
            }
        }
    }

    #[test]
    fn sorted_distinct_input_is_one_run(set in prop::collection::btree_set(-1000i64..1000, 1..100)) {
        let mut values: Vec<i64> = set.into_iter().collect();
        let len = values.len();
        prop_assert_eq!(longest_increasing_run(&values), len);
        values.reverse();
        prop_assert_eq!(longest_increasing_run(&values), 1);
    }

    #[test]
    fn samples_stay_in_clamped_range(
        center in -20i64..120,
        spread in 0i64..40,
        count in 0usize..200,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        match SampleRange::around(center, spread) {
            Ok(range) => {
                let samples = generate_bounded_samples_with(&mut rng, center, spread, count).unwrap();
                prop_assert_eq!(samples.len(), count);
                prop_assert_eq!(range.low, (center - spread).max(0));
                prop_assert_eq!(range.high, (center + spread + 1).min(90));
                prop_assert!(samples.iter().all(|&x| range.contains(i64::from(x))));
            }
            Err(err) => {
                let is_empty_range = matches!(err, KataError::EmptySampleRange { .. });
                prop_assert!(is_empty_range);
                prop_assert!(generate_bounded_samples_with(&mut rng, center, spread, count).is_err());
            }
        }
    }

    #[test]
    fn aggregate_always_in_range(
        groups in prop::collection::vec(prop::collection::vec(-200.0f64..300.0, 0..20), 1..6),
        weight_seed in prop::collection::vec(1u32..=5, 6),
    ) {
        prop_assume!(groups.iter().any(|g| !g.is_empty()));
        let weights = &weight_seed[..groups.len()];
        let score = weighted_aggregate_score(&groups, weights).unwrap();
        prop_assert!(score <= 90);
    }

    #[test]
    fn aggregate_of_only_empty_groups_is_zero_denominator(
        group_count in 1usize..6,
        weight in 1u32..=5,
    ) {
        let groups: Vec<Vec<f64>> = vec![Vec::new(); group_count];
        let weights = vec![weight; group_count];
        prop_assert_eq!(
            weighted_aggregate_score(&groups, &weights),
            Err(KataError::ZeroDenominator)
        );
    }

    #[test]
    fn cyclic_point_on_unit_circle(hour in 0i64..24) {
        let (sin, cos) = hour_to_cyclic_point(hour).unwrap();
        prop_assert!((sin * sin + cos * cos - 1.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_hours_rejected(hour in prop_oneof![i64::MIN..0i64, 24i64..i64::MAX]) {
        prop_assert_eq!(hour_to_cyclic_point(hour), Err(KataError::InvalidHour(hour)));
        prop_assert_eq!(circular_hour_difference(hour, 0), Err(KataError::InvalidHour(hour)));
        prop_assert_eq!(circular_hour_difference(0, hour), Err(KataError::InvalidHour(hour)));
    }

    #[test]
    fn hour_difference_symmetric_and_bounded(start in 0i64..24, end in 0i64..24) {
        let forward = circular_hour_difference(start, end).unwrap();
        let backward = circular_hour_difference(end, start).unwrap();
        prop_assert_eq!(forward, backward);
        prop_assert!(forward <= 12);
        prop_assert_eq!(forward == 0, start == end);
    }

    #[test]
    fn decode_inverts_encode(hour in 0i64..24) {
        let point = HourOfDay::new(hour).unwrap().to_cyclic_point();
        prop_assert!((point.to_hour() - hour as f64).abs() < 1e-9);
    }
}
