//! Multi-start hill climbing on feasible covers.
//!
//! A step drops the lowest-indexed redundant subset. After `patience` steps
//! without a drop, one random subset is removed and the cover is repaired with
//! random subsets that reach an uncovered element.

use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use setcover_kernel::instance::Instance;

use super::{greedy_cover, Coverage, LocalOutcome, LocalTermination};
use crate::error::SearchError;
use crate::trace::{AnytimeTrace, Incumbent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HillClimbParams {
    /// Independent starts; start `s` is seeded with `seed + s`.
    pub restarts: u64,
    /// Failed steps tolerated before a perturbation.
    pub patience: usize,
    /// Step cap per start.
    pub max_steps: usize,
}

impl Default for HillClimbParams {
    fn default() -> Self {
        Self {
            restarts: 10,
            patience: 10,
            max_steps: 1000,
        }
    }
}

impl HillClimbParams {
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidParameters`] if any field is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.restarts == 0 || self.patience == 0 || self.max_steps == 0 {
            return Err(SearchError::InvalidParameters {
                detail: format!(
                    "restarts, patience and max_steps must be at least 1, got {self:?}"
                ),
            });
        }
        Ok(())
    }
}

/// Shared state across starts: the global best and its trace.
struct Best<'a> {
    start: Instant,
    incumbent: &'a mut Incumbent,
    trace: &'a mut AnytimeTrace,
}

impl Best<'_> {
    fn offer(&mut self, current: &Coverage) {
        if current.is_cover() && current.size < self.incumbent.cost {
            *self.incumbent = current.incumbent();
            self.trace.record(self.start.elapsed(), self.incumbent.cost);
            debug!("hill climbing improved to {}", self.incumbent.cost);
        }
    }
}

/// Remove one random subset, then add random subsets until covered again.
fn perturb(instance: &Instance, rng: &mut SmallRng, current: &mut Coverage) {
    if let Some(&dropped) = current.chosen().choose(rng) {
        current.remove(instance, dropped);
    }
    while !current.is_cover() {
        let addable: Vec<usize> = (0..instance.subset_count())
            .filter(|&i| {
                !current.is_selected(i)
                    && instance.subset(i).iter().any(|e| current.counts[e] == 0)
            })
            .collect();
        let Some(&added) = addable.choose(rng) else {
            break;
        };
        current.add(instance, added);
    }
}

/// One start. Returns `true` if the cutoff interrupted it.
fn climb(
    instance: &Instance,
    params: &HillClimbParams,
    rng: &mut SmallRng,
    mut current: Coverage,
    cutoff: Duration,
    best: &mut Best<'_>,
) -> bool {
    let mut failures = 0;
    for _ in 0..params.max_steps {
        if best.start.elapsed() >= cutoff {
            return true;
        }
        let redundant =
            (0..instance.subset_count()).find(|&i| current.is_redundant(instance, i));
        if let Some(index) = redundant {
            current.remove(instance, index);
            failures = 0;
            best.offer(&current);
        } else {
            failures += 1;
        }
        if failures >= params.patience && current.size > 1 {
            perturb(instance, rng, &mut current);
            failures = 0;
            best.offer(&current);
        }
    }
    false
}

/// Run `params.restarts` hill climbs from the greedy cover, sharing one
/// cutoff, and keep the best cover any of them reaches.
///
/// # Errors
///
/// Returns [`SearchError::InvalidParameters`] if `params` fail validation.
pub fn hill_climbing(
    instance: &Instance,
    params: &HillClimbParams,
    cutoff: Duration,
    seed: u64,
) -> Result<LocalOutcome, SearchError> {
    params.validate()?;
    let start = Instant::now();

    let Some(greedy) = greedy_cover(instance) else {
        info!("hill climbing skipped: instance is infeasible");
        return Ok(LocalOutcome::infeasible(start.elapsed()));
    };

    let seed_cover = Coverage::from_chosen(instance, &greedy);
    let mut incumbent = seed_cover.incumbent();
    let mut trace = AnytimeTrace::new();
    trace.record(start.elapsed(), incumbent.cost);

    let mut termination = LocalTermination::Completed;
    {
        let mut best = Best {
            start,
            incumbent: &mut incumbent,
            trace: &mut trace,
        };
        for restart in 0..params.restarts {
            if start.elapsed() >= cutoff {
                termination = LocalTermination::CutoffReached;
                break;
            }
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(restart));
            if climb(
                instance,
                params,
                &mut rng,
                seed_cover.clone(),
                cutoff,
                &mut best,
            ) {
                termination = LocalTermination::CutoffReached;
                break;
            }
        }
    }

    let elapsed = start.elapsed();
    info!(
        "hill climbing finished ({termination:?}): best cost {}",
        incumbent.cost
    );
    Ok(LocalOutcome {
        termination,
        incumbent: Some(incumbent),
        trace,
        elapsed,
    })
}
