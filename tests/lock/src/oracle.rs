//! Exhaustive minimum-cover oracle for small instances.
//!
//! Enumerates every selection of `pool`, so it is only usable for pools of
//! at most [`MAX_ORACLE_POOL`] subsets.

use setcover_kernel::element_set::ElementSet;
use setcover_kernel::instance::Instance;

pub const MAX_ORACLE_POOL: usize = 20;

/// Size of the smallest selection of `pool` covering `uncovered`, or `None`
/// if even the whole pool leaves something uncovered.
///
/// # Panics
///
/// Panics if `pool` is larger than [`MAX_ORACLE_POOL`].
#[must_use]
pub fn min_cover_size(uncovered: &ElementSet, pool: &[ElementSet]) -> Option<usize> {
    assert!(
        pool.len() <= MAX_ORACLE_POOL,
        "oracle pool too large: {}",
        pool.len()
    );
    let mut best: Option<usize> = None;
    for mask in 0u32..(1u32 << pool.len()) {
        let size = mask.count_ones() as usize;
        if best.is_some_and(|b| size >= b) {
            continue;
        }
        let mut remaining = uncovered.clone();
        for (index, subset) in pool.iter().enumerate() {
            if mask & (1 << index) != 0 {
                remaining.difference_with(subset);
            }
        }
        if remaining.is_empty() {
            best = Some(size);
        }
    }
    best
}

/// Optimal cover cost of `instance`, or `None` if it is infeasible.
#[must_use]
pub fn optimum(instance: &Instance) -> Option<usize> {
    min_cover_size(&instance.universe(), instance.subsets())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn oracle_solves_worked_example() {
        assert_eq!(optimum(&fixtures::worked_example()), Some(2));
    }

    #[test]
    fn oracle_detects_infeasible() {
        let inst = Instance::new(2, vec![vec![1]]).unwrap();
        assert_eq!(optimum(&inst), None);
    }

    #[test]
    fn empty_residual_needs_nothing() {
        let pool = fixtures::decoy().subsets().to_vec();
        assert_eq!(min_cover_size(&ElementSet::with_universe_size(6), &pool), Some(0));
    }
}
