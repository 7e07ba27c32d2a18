// Integration tests for the binary insertion sort trace generator

use bisortty::snapshot::Trace;
use bisortty::trace::{generate, Step, StepKind};
use proptest::prelude::*;

/// Replay the trace's moves over `(value, original_index)` pairs.
///
/// Only `Search` (start), `Shift` and `Insert` steps are used, so the result
/// shows where each original element ended up according to the trace itself.
fn replay_with_provenance(input: &[i64], steps: &[Step]) -> Vec<(i64, usize)> {
    let mut tagged: Vec<(i64, usize)> = input.iter().copied().zip(0..).collect();
    let mut held: Option<(i64, usize)> = None;

    for step in steps {
        match step.kind {
            StepKind::Search if step.working_indices.is_empty() => {
                let i = step.target_index.expect("search start names its target");
                held = Some(tagged[i]);
            }
            StepKind::Shift => {
                let (dest, src) = (step.working_indices[0], step.working_indices[1]);
                tagged[dest] = tagged[src];
            }
            StepKind::Insert => {
                let pos = step.working_indices[0];
                tagged[pos] = held.take().expect("insert follows a search");
            }
            _ => {}
        }
    }

    tagged
}

/// Steps that belong to outer index `i`
fn steps_for(steps: &[Step], i: usize) -> Vec<&Step> {
    steps.iter().filter(|s| s.target_index == Some(i)).collect()
}

fn sorted_copy(values: &[i64]) -> Vec<i64> {
    let mut v = values.to_vec();
    v.sort();
    v
}

proptest! {
    #[test]
    fn prop_trace_starts_with_init_and_ends_with_complete(input in prop::collection::vec(-50i64..50, 0..40)) {
        let steps = generate(&input);
        prop_assert!(steps.len() >= 2);
        prop_assert_eq!(steps.first().unwrap().kind, StepKind::Init);
        prop_assert_eq!(steps.last().unwrap().kind, StepKind::Complete);
        prop_assert_eq!(steps.iter().filter(|s| s.kind == StepKind::Init).count(), 1);
        prop_assert_eq!(steps.iter().filter(|s| s.kind == StepKind::Complete).count(), 1);
    }

    #[test]
    fn prop_final_array_is_sorted_permutation(input in prop::collection::vec(-50i64..50, 0..40)) {
        let steps = generate(&input);
        let last = &steps.last().unwrap().array;
        prop_assert!(last.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(last, &sorted_copy(&input));
    }

    #[test]
    fn prop_equal_values_follow_left_tie_break(input in prop::collection::vec(0i64..5, 0..30)) {
        let steps = generate(&input);
        let tagged = replay_with_provenance(&input, &steps);

        let values: Vec<i64> = tagged.iter().map(|&(v, _)| v).collect();
        prop_assert_eq!(&values, &steps.last().unwrap().array);

        // equality routes to `high = mid - 1`, so each value lands ahead of the
        // equal values already placed and every run of equals comes out reversed
        for pair in tagged.windows(2) {
            if pair[0].0 == pair[1].0 {
                prop_assert!(pair[0].1 > pair[1].1, "equal run not reversed: {:?}", pair);
            }
        }
    }

    #[test]
    fn prop_shift_count_matches_resolved_position(input in prop::collection::vec(-20i64..20, 0..30)) {
        let steps = generate(&input);
        let n = input.len();
        let mut total_shifts = 0;

        for i in 1..n {
            let group = steps_for(&steps, i);
            let pos = group
                .iter()
                .find_map(|s| s.resolved_position())
                .expect("every outer iteration resolves a position");
            let shifts: Vec<&&Step> = group.iter().filter(|s| s.kind == StepKind::Shift).collect();

            prop_assert_eq!(shifts.len(), i - pos);
            // destinations run from i down to pos + 1
            for (k, s) in shifts.iter().enumerate() {
                prop_assert_eq!(s.working_indices.clone(), vec![i - k, i - k - 1]);
            }
            total_shifts += shifts.len();
        }

        prop_assert!(total_shifts <= n * n.saturating_sub(1) / 2);
        prop_assert_eq!(Trace::generate(&input).stats().shifts, total_shifts);
    }

    #[test]
    fn prop_search_ranges_stay_in_prefix_and_shrink(input in prop::collection::vec(-20i64..20, 0..30)) {
        let steps = generate(&input);

        for i in 1..input.len() {
            let mut last_width: Option<usize> = None;
            for step in steps_for(&steps, i) {
                if let Some(range) = step.search_range {
                    prop_assert_eq!(step.kind, StepKind::Search);
                    prop_assert!(range.low <= range.high + 1);
                    prop_assert!(range.high + 1 <= i);
                }
                if step.is_probe() {
                    let width = step.search_range.unwrap().width();
                    if let Some(prev) = last_width {
                        prop_assert!(width < prev, "range did not shrink: {} -> {}", prev, width);
                    }
                    last_width = Some(width);
                }
            }
        }
    }

    #[test]
    fn prop_generation_is_deterministic(input in prop::collection::vec(any::<i64>(), 0..20)) {
        prop_assert_eq!(generate(&input), generate(&input));
    }
}

#[test]
fn test_scenario_first_iteration_of_5_3_8_1() {
    let steps = generate(&[5, 3, 8, 1]);
    let group = steps_for(&steps, 1);

    let start = group[0];
    assert_eq!(start.kind, StepKind::Search);
    assert_eq!(start.search_range.map(|r| (r.low, r.high)), Some((0, 0)));

    assert_eq!(group.iter().find_map(|s| s.resolved_position()), Some(0));
    assert_eq!(
        group.iter().filter(|s| s.kind == StepKind::Shift).count(),
        1
    );

    let insert = group.last().unwrap();
    assert_eq!(insert.kind, StepKind::Insert);
    assert_eq!(insert.array, vec![3, 5, 8, 1]);
}

#[test]
fn test_scenario_already_sorted() {
    let input = [1, 2, 3, 4];
    let steps = generate(&input);

    for i in 1..input.len() {
        let group = steps_for(&steps, i);
        assert_eq!(group.iter().find_map(|s| s.resolved_position()), Some(i));
    }
    assert!(steps.iter().all(|s| s.kind != StepKind::Shift));
    assert_eq!(steps.last().unwrap().array, input.to_vec());
}

#[test]
fn test_scenario_single_element() {
    let steps = generate(&[1]);
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].kind, StepKind::Init);
    assert_eq!(steps[1].kind, StepKind::Complete);
    assert_eq!(steps[0].array, vec![1]);
    assert_eq!(steps[1].array, vec![1]);
    assert_eq!(steps[1].working_indices, vec![0]);
}

#[test]
fn test_scenario_all_equal_takes_left_branch() {
    let input = [4, 4, 4];
    let steps = generate(&input);

    let probes: Vec<&Step> = steps.iter().filter(|s| s.is_probe()).collect();
    assert_eq!(probes.len(), 2);
    for probe in &probes {
        assert!(probe.description().contains("left half"));
    }

    // every search ends at the front of the prefix
    for i in 1..input.len() {
        let group = steps_for(&steps, i);
        assert_eq!(group.iter().find_map(|s| s.resolved_position()), Some(0));
        assert_eq!(
            group.iter().filter(|s| s.kind == StepKind::Shift).count(),
            i
        );
    }
    assert_eq!(steps.last().unwrap().array, vec![4, 4, 4]);

    let order: Vec<usize> = replay_with_provenance(&input, &steps)
        .into_iter()
        .map(|(_, tag)| tag)
        .collect();
    assert_eq!(order, vec![2, 1, 0]);
}

#[test]
fn test_snapshots_do_not_alias() {
    let mut steps = generate(&[2, 1]);
    steps[0].array[0] = 99;
    assert_eq!(steps[1].array, vec![2, 1]);
}

#[test]
fn test_larger_inputs_terminate() {
    for n in [0usize, 1, 2, 17, 64, 200] {
        let input: Vec<i64> = (0..n as i64).rev().collect();
        let steps = generate(&input);
        assert_eq!(steps.first().unwrap().kind, StepKind::Init);
        assert_eq!(steps.last().unwrap().kind, StepKind::Complete);
        assert_eq!(steps.last().unwrap().array, sorted_copy(&input));
    }
}
