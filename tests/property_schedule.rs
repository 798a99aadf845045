use std::collections::HashSet;

use proptest::prelude::*;
use stepplan::dag::{Step, compute_schedule};
use stepplan::errors::PlannerError;

// Strategy to generate a valid (acyclic) list of steps.
// We ensure acyclicity by only allowing step N to depend on steps 0..N-1.
fn acyclic_steps_strategy(max_steps: usize) -> impl Strategy<Value = Vec<Step>> {
    (1..=max_steps).prop_flat_map(|num_steps| {
        let deps_strat = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..num_steps),
            num_steps,
        );
        let durations_strat = proptest::collection::vec(0u64..50, num_steps);

        (deps_strat, durations_strat).prop_map(|(raw_deps, durations)| {
            raw_deps
                .into_iter()
                .zip(durations)
                .enumerate()
                .map(|(i, (potential_deps, duration))| {
                    let mut step = Step::new(format!("step_{i}"), duration);

                    // Sanitize dependencies: only allow deps < i, once each.
                    let mut seen = HashSet::new();
                    for dep_idx in potential_deps {
                        if i > 0 && seen.insert(dep_idx % i) {
                            step = step.after(format!("step_{}", dep_idx % i));
                        }
                    }
                    step
                })
                .collect()
        })
    })
}

// Shuffling the declaration order must not matter for timing.
fn shuffled_acyclic_steps(max_steps: usize) -> impl Strategy<Value = Vec<Step>> {
    acyclic_steps_strategy(max_steps).prop_shuffle()
}

proptest! {
    #[test]
    fn roots_start_at_zero(steps in shuffled_acyclic_steps(12)) {
        let schedule = compute_schedule(&steps).unwrap();
        for step in steps.iter().filter(|s| s.dependencies.is_empty()) {
            prop_assert_eq!(schedule.start_time(&step.name), Some(0));
        }
    }

    #[test]
    fn start_is_latest_dependency_end(steps in shuffled_acyclic_steps(12)) {
        let schedule = compute_schedule(&steps).unwrap();
        prop_assert_eq!(schedule.len(), steps.len());

        for step in steps.iter() {
            let start = schedule.start_time(&step.name).unwrap();
            let latest_dep_end = step
                .dependencies
                .iter()
                .map(|d| schedule.end_time(d).unwrap())
                .max()
                .unwrap_or(0);

            prop_assert_eq!(start, latest_dep_end, "step {}", &step.name);
            prop_assert_eq!(schedule.end_time(&step.name), Some(start + step.duration));
        }
    }

    #[test]
    fn total_duration_is_latest_end(steps in shuffled_acyclic_steps(12)) {
        let schedule = compute_schedule(&steps).unwrap();
        let latest_end = steps
            .iter()
            .map(|s| schedule.start_time(&s.name).unwrap() + s.duration)
            .max()
            .unwrap_or(0);
        prop_assert_eq!(schedule.total_duration(), latest_end);
    }

    #[test]
    fn computing_twice_gives_identical_schedules(steps in shuffled_acyclic_steps(12)) {
        let first = compute_schedule(&steps).unwrap();
        let second = compute_schedule(&steps).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn closing_a_cycle_always_fails(steps in acyclic_steps_strategy(8)) {
        // The last step and a new `loop_head` step depend on each other.
        prop_assume!(steps.len() > 1);
        let mut steps = steps;
        let last = steps[steps.len() - 1].name.clone();
        steps.push(Step::new("loop_head", 1).after(last.clone()));
        let head = steps.len() - 1;
        steps[head - 1].dependencies.push("loop_head".to_string());

        let result = compute_schedule(&steps);
        let is_cycle_error = matches!(result, Err(PlannerError::CycleOrMissingDependency { .. }));
        prop_assert!(is_cycle_error);
    }
}
