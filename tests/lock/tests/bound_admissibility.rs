//! Bound lock tests: the fractional estimate never exceeds the true remaining
//! cost, and the greedy upper bound is always a valid cover.

use lock_tests::{fixtures, oracle};
use setcover_kernel::element_set::ElementSet;
use setcover_kernel::instance::Instance;
use setcover_search::bound::{fractional_lower_bound, initial_upper_bound, UpperBound};

const EPS: f64 = 1e-9;

/// Residual left by a deterministic pseudo-random selection from the first
/// `k` subsets, as a search node at depth `k` would see it.
fn residual_at_depth(instance: &Instance, k: usize, salt: u64) -> ElementSet {
    let chosen: Vec<usize> = (0..k)
        .filter(|&i| (salt.wrapping_mul(31).wrapping_add(i as u64 * 7)) % 3 == 0)
        .collect();
    instance.uncovered_after(&chosen)
}

#[test]
fn fractional_bound_is_admissible_on_every_suffix() {
    for seed in 0..80 {
        let instance = fixtures::small_random(seed);
        for k in 0..=instance.subset_count() {
            let residual = residual_at_depth(&instance, k, seed);
            let pool = &instance.subsets()[k..];
            let bound = fractional_lower_bound(&residual, pool);
            match oracle::min_cover_size(&residual, pool) {
                Some(optimum) => {
                    assert!(
                        bound <= optimum as f64 + EPS,
                        "seed {seed} depth {k}: bound {bound} exceeds optimum {optimum}"
                    );
                    if !residual.is_empty() {
                        assert!(bound > 0.0, "nonempty residual must cost something");
                    }
                }
                None => assert!(
                    bound.is_infinite(),
                    "seed {seed} depth {k}: uncoverable residual must bound to infinity"
                ),
            }
        }
    }
}

#[test]
fn overlapping_decoy_stays_admissible() {
    let instance = fixtures::decoy();
    let bound = fractional_lower_bound(&instance.universe(), instance.subsets());
    assert!(bound <= 2.0 + EPS, "bound {bound} exceeds optimum 2");
}

#[test]
fn root_bound_never_exceeds_greedy_cost() {
    for seed in 0..40 {
        let instance = fixtures::small_random(seed);
        let universe = instance.universe();
        let UpperBound::Feasible(cover) = initial_upper_bound(&universe, instance.subsets()) else {
            panic!("seed {seed}: random fixtures are feasible");
        };
        let bound = fractional_lower_bound(&universe, instance.subsets());
        assert!(bound <= cover.cost as f64 + EPS, "seed {seed}");
    }
}

#[test]
fn greedy_upper_bound_is_a_cover_no_better_than_optimum() {
    for seed in 0..80 {
        let instance = fixtures::small_random(seed);
        let universe = instance.universe();
        let UpperBound::Feasible(cover) = initial_upper_bound(&universe, instance.subsets()) else {
            panic!("seed {seed}: random fixtures are feasible");
        };
        assert!(instance.is_cover(&cover.chosen));
        assert_eq!(Some(cover.cost), Some(cover.chosen.len()));
        assert!(Some(cover.cost) >= oracle::optimum(&instance));
    }
}
