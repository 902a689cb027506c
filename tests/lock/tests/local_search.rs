//! Local-search lock tests: feasibility, oracle lower bound, and seed
//! reproducibility for simulated annealing and hill climbing.

use std::time::Duration;

use lock_tests::{fixtures, oracle};
use setcover_search::local::anneal::{simulated_annealing, AnnealingParams};
use setcover_search::local::hill_climb::{hill_climbing, HillClimbParams};
use setcover_search::local::LocalTermination;

const CUTOFF: Duration = Duration::from_secs(60);

#[test]
fn annealing_covers_are_valid_and_never_beat_optimum() {
    for seed in 0..25 {
        let instance = fixtures::small_random(seed);
        let outcome =
            simulated_annealing(&instance, &AnnealingParams::default(), CUTOFF, seed).unwrap();
        assert_eq!(outcome.termination, LocalTermination::Completed);
        let incumbent = outcome.incumbent.unwrap();
        assert!(instance.is_cover(&incumbent.chosen), "seed {seed}");
        assert!(Some(incumbent.cost) >= oracle::optimum(&instance), "seed {seed}");
    }
}

#[test]
fn hill_climbing_never_worse_than_greedy() {
    for seed in 0..25 {
        let instance = fixtures::small_random(seed);
        let outcome = hill_climbing(&instance, &HillClimbParams::default(), CUTOFF, seed).unwrap();
        assert_eq!(outcome.termination, LocalTermination::Completed);
        let first = outcome.trace.entries()[0].cost;
        let incumbent = outcome.incumbent.unwrap();
        assert!(instance.is_cover(&incumbent.chosen), "seed {seed}");
        assert!(incumbent.cost <= first, "seed {seed}");
        assert!(Some(incumbent.cost) >= oracle::optimum(&instance), "seed {seed}");
    }
}

#[test]
fn local_traces_strictly_improve() {
    let instance = fixtures::small_random(42);
    let annealed =
        simulated_annealing(&instance, &AnnealingParams::default(), CUTOFF, 42).unwrap();
    let climbed = hill_climbing(&instance, &HillClimbParams::default(), CUTOFF, 42).unwrap();
    for trace in [&annealed.trace, &climbed.trace] {
        for pair in trace.entries().windows(2) {
            assert!(pair[1].cost < pair[0].cost);
            assert!(pair[1].elapsed >= pair[0].elapsed);
        }
    }
}

#[test]
fn same_seed_same_answer() {
    let instance = fixtures::small_random(7);
    let anneal = |seed| {
        simulated_annealing(&instance, &AnnealingParams::default(), CUTOFF, seed)
            .unwrap()
            .incumbent
    };
    let climb = |seed| {
        hill_climbing(&instance, &HillClimbParams::default(), CUTOFF, seed)
            .unwrap()
            .incumbent
    };
    assert_eq!(anneal(1587), anneal(1587));
    assert_eq!(climb(1587), climb(1587));
}

#[test]
fn infeasible_fixture_short_circuits_both() {
    let instance = fixtures::infeasible();
    let annealed = simulated_annealing(&instance, &AnnealingParams::default(), CUTOFF, 0).unwrap();
    let climbed = hill_climbing(&instance, &HillClimbParams::default(), CUTOFF, 0).unwrap();
    assert_eq!(annealed.termination, LocalTermination::Infeasible);
    assert_eq!(climbed.termination, LocalTermination::Infeasible);
}
