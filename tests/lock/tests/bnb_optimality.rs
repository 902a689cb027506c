//! Branch-and-bound lock tests: optimality against the exhaustive oracle,
//! anytime trace shape, infeasibility, and budgeted runs.

use std::time::Duration;

use lock_tests::{fixtures, oracle};
use setcover_harness::synth::{random_instance, SynthParams};
use setcover_kernel::instance::Instance;
use setcover_search::bound::{initial_upper_bound, UpperBound};
use setcover_search::policy::SearchPolicy;
use setcover_search::search::{search, SearchOutcome, TerminationReason};

fn solve(instance: &Instance) -> SearchOutcome {
    search(instance, &SearchPolicy::with_cutoff(Duration::from_secs(60))).unwrap()
}

fn greedy_cost(instance: &Instance) -> usize {
    match initial_upper_bound(&instance.universe(), instance.subsets()) {
        UpperBound::Feasible(cover) => cover.cost,
        UpperBound::Infeasible => panic!("instance is feasible"),
    }
}

fn assert_trace_shape(outcome: &SearchOutcome) {
    let entries = outcome.trace.entries();
    assert!(!entries.is_empty(), "feasible run must record the greedy seed");
    for pair in entries.windows(2) {
        assert!(pair[1].cost < pair[0].cost, "costs must strictly decrease");
        assert!(pair[1].elapsed >= pair[0].elapsed, "time must not go backwards");
    }
    assert_eq!(outcome.trace.best_cost(), outcome.best_cost());
}

// ---------------------------------------------------------------------------
// Optimality
// ---------------------------------------------------------------------------

#[test]
fn search_matches_oracle_on_random_instances() {
    for seed in 0..150 {
        let instance = fixtures::small_random(seed);
        let outcome = solve(&instance);
        assert_eq!(
            outcome.termination,
            TerminationReason::OptimalityProven,
            "seed {seed}"
        );
        let incumbent = outcome.incumbent.as_ref().unwrap();
        assert!(instance.is_cover(&incumbent.chosen), "seed {seed}");
        assert_eq!(incumbent.cost, incumbent.chosen.len());
        assert_eq!(Some(incumbent.cost), oracle::optimum(&instance), "seed {seed}");
        assert!(incumbent.cost <= greedy_cost(&instance));
    }
}

#[test]
fn worked_example_is_optimal_at_greedy_cost() {
    let outcome = solve(&fixtures::worked_example());
    assert!(outcome.is_proven_optimal());
    assert_eq!(outcome.incumbent.unwrap().sorted_chosen(), vec![0, 2]);
    assert_eq!(outcome.trace.len(), 1, "no improvement over the seed");
}

#[test]
fn decoy_improves_on_greedy() {
    let instance = fixtures::decoy();
    let outcome = solve(&instance);
    assert!(outcome.is_proven_optimal());
    assert_eq!(outcome.best_cost(), Some(2));
    assert_eq!(outcome.trace.entries()[0].cost, greedy_cost(&instance));
    assert_trace_shape(&outcome);
}

#[test]
fn duplicate_and_empty_subsets_do_not_change_optimum() {
    let instance = Instance::new(
        6,
        vec![
            vec![],
            vec![1, 2, 3],
            vec![1, 2, 3],
            vec![4, 5, 6],
            vec![],
            vec![3, 4],
        ],
    )
    .unwrap();
    let outcome = solve(&instance);
    assert!(outcome.is_proven_optimal());
    let incumbent = outcome.incumbent.unwrap();
    assert_eq!(incumbent.cost, 2);
    assert!(!incumbent.chosen.contains(&0) && !incumbent.chosen.contains(&4));
}

// ---------------------------------------------------------------------------
// Anytime trace
// ---------------------------------------------------------------------------

#[test]
fn trace_is_strictly_improving_on_random_instances() {
    for seed in 0..60 {
        let outcome = solve(&fixtures::small_random(seed));
        assert_trace_shape(&outcome);
        assert_eq!(
            outcome.trace.entries()[0].cost,
            greedy_cost(&fixtures::small_random(seed)),
            "first trace entry is the greedy seed (seed {seed})"
        );
    }
}

// ---------------------------------------------------------------------------
// Infeasibility
// ---------------------------------------------------------------------------

#[test]
fn infeasible_instances_terminate_without_search() {
    let params = SynthParams {
        universe_size: 12,
        subset_count: 10,
        density: 0.4,
        feasible: false,
    };
    for seed in 0..20 {
        let outcome = solve(&random_instance(&params, seed).unwrap());
        assert_eq!(outcome.termination, TerminationReason::Infeasible);
        assert!(outcome.incumbent.is_none());
        assert!(outcome.trace.is_empty());
        assert_eq!(outcome.stats.expansions, 0);
    }
    assert!(solve(&fixtures::infeasible()).is_infeasible());
}

#[test]
fn no_subsets_with_nonempty_universe_is_infeasible() {
    let instance = Instance::new(3, Vec::<Vec<usize>>::new()).unwrap();
    assert!(solve(&instance).is_infeasible());
}

// ---------------------------------------------------------------------------
// Budgets
// ---------------------------------------------------------------------------

#[test]
fn expansion_budget_returns_valid_best_effort() {
    for seed in 0..40 {
        let instance = fixtures::small_random(seed);
        let policy = SearchPolicy {
            max_expansions: Some(3),
            ..SearchPolicy::with_cutoff(Duration::from_secs(60))
        };
        let outcome = search(&instance, &policy).unwrap();
        assert!(matches!(
            outcome.termination,
            TerminationReason::OptimalityProven | TerminationReason::ExpansionBudgetExceeded
        ));
        assert!(outcome.stats.expansions <= 3);
        let incumbent = outcome.incumbent.unwrap();
        assert!(instance.is_cover(&incumbent.chosen));
        assert!(Some(incumbent.cost) >= oracle::optimum(&instance));
    }
}

#[test]
fn zero_cutoff_returns_greedy_cover() {
    let instance = fixtures::decoy();
    let outcome = search(&instance, &SearchPolicy::with_cutoff(Duration::ZERO)).unwrap();
    assert_eq!(outcome.termination, TerminationReason::CutoffReached);
    assert!(!outcome.is_proven_optimal());
    assert_eq!(outcome.best_cost(), Some(greedy_cost(&instance)));
}

#[test]
fn repeated_runs_are_identical() {
    for seed in [3, 17, 99] {
        let instance = fixtures::small_random(seed);
        let first = solve(&instance);
        let second = solve(&instance);
        assert_eq!(first.incumbent, second.incumbent);
        assert_eq!(first.stats, second.stats);
        let first_costs: Vec<usize> = first.trace.entries().iter().map(|e| e.cost).collect();
        let second_costs: Vec<usize> = second.trace.entries().iter().map(|e| e.cost).collect();
        assert_eq!(first_costs, second_costs);
    }
}
