//! Greedy bound estimator.
//!
//! - [`initial_upper_bound`]: integral greedy cover, seeds the incumbent.
//! - [`fractional_lower_bound`]: admissible fractional estimate of the number
//!   of pool subsets still needed to cover a residual.
//!
//! Both functions are pure: same inputs, same result.

use setcover_kernel::element_set::ElementSet;

use crate::trace::Incumbent;

/// Result of the integral greedy pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpperBound {
    /// A feasible cover built greedily.
    Feasible(Incumbent),
    /// Some element of the universe is contained in no subset.
    Infeasible,
}

/// Greedy cover: repeatedly take the unused subset covering the most
/// still-uncovered elements (first maximum in index order wins).
#[must_use]
pub fn initial_upper_bound(universe: &ElementSet, subsets: &[ElementSet]) -> UpperBound {
    let mut uncovered = universe.clone();
    let mut used = vec![false; subsets.len()];
    let mut chosen = Vec::new();

    while !uncovered.is_empty() {
        let mut best: Option<(usize, usize)> = None;
        for (index, subset) in subsets.iter().enumerate() {
            if used[index] {
                continue;
            }
            let gain = subset.intersection_len(&uncovered);
            if best.map_or(true, |(_, best_gain)| gain > best_gain) {
                best = Some((index, gain));
            }
        }
        match best {
            Some((index, gain)) if gain > 0 => {
                used[index] = true;
                uncovered.difference_with(&subsets[index]);
                chosen.push(index);
            }
            _ => return UpperBound::Infeasible,
        }
    }

    UpperBound::Feasible(Incumbent::from_chosen(chosen))
}

/// Fractional lower bound on the number of `pool` subsets needed to cover
/// `uncovered`. Returns `f64::INFINITY` if the pool cannot cover it.
///
/// Subsets are swept most-coverage-first: in descending order of
/// `c_S = |S ∩ uncovered|`, ties by pool index. Each visited subset claims the
/// residual elements not claimed yet and contributes `claimed / c_S`, so every
/// subset the sweep uses costs a fraction of one. The total equals
/// `Σ_e 1 / max_{S ∋ e} c_S`, which is dual-feasible for the covering LP and
/// therefore never exceeds the integral optimum.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fractional_lower_bound(uncovered: &ElementSet, pool: &[ElementSet]) -> f64 {
    if uncovered.is_empty() {
        return 0.0;
    }

    let mut sweep: Vec<(usize, usize)> = pool
        .iter()
        .enumerate()
        .map(|(index, subset)| (index, subset.intersection_len(uncovered)))
        .filter(|&(_, coverage)| coverage > 0)
        .collect();
    sweep.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut unclaimed = uncovered.clone();
    let mut bound = 0.0;
    for (index, coverage) in sweep {
        if unclaimed.is_empty() {
            break;
        }
        let claimed = pool[index].intersection_len(&unclaimed);
        if claimed == 0 {
            continue;
        }
        unclaimed.difference_with(&pool[index]);
        bound += claimed as f64 / coverage as f64;
    }

    if unclaimed.is_empty() {
        bound
    } else {
        f64::INFINITY
    }
}
