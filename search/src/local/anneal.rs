//! Simulated annealing over subset selections.
//!
//! The state is any selection, feasible or not. The objective penalises
//! over-covered and uncovered elements so the walk drifts towards small
//! exact covers:
//!
//! ```text
//! f(S) = |S| + Σ_{count(e) > 1} 10·count(e) + Σ_{count(e) = 0} 100
//! ```

use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use setcover_kernel::instance::Instance;

use super::{greedy_cover, Coverage, LocalOutcome, LocalTermination};
use crate::error::SearchError;
use crate::trace::AnytimeTrace;

const OVER_COVER_WEIGHT: i64 = 10;
const UNCOVERED_PENALTY: i64 = 100;

/// Cooling schedule and neighbourhood sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealingParams {
    pub initial_temperature: f64,
    /// Geometric factor applied after every step.
    pub cooling_rate: f64,
    /// The walk stops once the temperature drops to this value.
    pub min_temperature: f64,
    /// Steps spent above the best cover size before jumping back to it.
    pub restart_after: usize,
    /// Random subsets drawn into each neighbourhood.
    pub sample_size: usize,
    /// Proposals drawn per step before the last one is taken regardless.
    pub max_tries: usize,
}

impl Default for AnnealingParams {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.99,
            min_temperature: 5.0,
            restart_after: 50,
            sample_size: 10,
            max_tries: 10,
        }
    }
}

impl AnnealingParams {
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidParameters`] if the schedule would not
    /// terminate or a count is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        fn invalid(detail: String) -> Result<(), SearchError> {
            Err(SearchError::InvalidParameters { detail })
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return invalid(format!(
                "min_temperature must be finite and positive, got {}",
                self.min_temperature
            ));
        }
        if !(self.initial_temperature.is_finite()
            && self.initial_temperature > self.min_temperature)
        {
            return invalid(format!(
                "initial_temperature must be finite and above min_temperature, got {}",
                self.initial_temperature
            ));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return invalid(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        if self.restart_after == 0 || self.max_tries == 0 {
            return invalid("restart_after and max_tries must be at least 1".to_string());
        }
        Ok(())
    }
}

fn penalty(count: usize) -> i64 {
    match count {
        0 => UNCOVERED_PENALTY,
        1 => 0,
        c => OVER_COVER_WEIGHT * i64::try_from(c).unwrap_or(i64::MAX / OVER_COVER_WEIGHT),
    }
}

/// Change in the objective if `index` were flipped.
fn flip_delta(coverage: &Coverage, instance: &Instance, index: usize) -> i64 {
    let adding = !coverage.is_selected(index);
    let mut delta = if adding { 1 } else { -1 };
    for element in instance.subset(index).iter() {
        let count = coverage.counts[element];
        let next = if adding { count + 1 } else { count - 1 };
        delta += penalty(next) - penalty(count);
    }
    delta
}

/// `incidence[e]` = indices of the subsets containing `e`.
fn incidence(instance: &Instance) -> Vec<Vec<usize>> {
    let mut incidence = vec![Vec::new(); instance.universe_size() + 1];
    for (index, subset) in instance.subsets().iter().enumerate() {
        for element in subset.iter() {
            incidence[element].push(index);
        }
    }
    incidence
}

/// Draw a subset to flip.
///
/// The neighbourhood is a random sample plus the selected subsets holding the
/// most over-covered element. If some element is uncovered, it is replaced by
/// the unselected subsets that would cover it.
fn propose(
    rng: &mut SmallRng,
    coverage: &Coverage,
    incidence: &[Vec<usize>],
    sample_size: usize,
) -> Option<usize> {
    let subset_count = coverage.selected.len();
    if subset_count == 0 {
        return None;
    }
    let mut neighbourhood =
        rand::seq::index::sample(rng, subset_count, sample_size.min(subset_count)).into_vec();

    let elements = 1..coverage.counts.len();
    if let Some(over) = elements
        .clone()
        .min_by_key(|&e| (std::cmp::Reverse(coverage.counts[e]), e))
    {
        if coverage.counts[over] > 1 {
            neighbourhood.extend(
                incidence[over]
                    .iter()
                    .copied()
                    .filter(|&i| coverage.is_selected(i)),
            );
        }
    }
    if let Some(lack) = elements.min_by_key(|&e| (coverage.counts[e], e)) {
        if coverage.counts[lack] == 0 {
            neighbourhood = incidence[lack]
                .iter()
                .copied()
                .filter(|&i| !coverage.is_selected(i))
                .collect();
        }
    }
    if neighbourhood.is_empty() {
        neighbourhood = (0..subset_count).collect();
    }
    neighbourhood.choose(rng).copied()
}

fn accepts(rng: &mut SmallRng, delta: i64, temperature: f64) -> bool {
    if delta <= 0 {
        return true;
    }
    #[allow(clippy::cast_precision_loss)]
    let probability = (-(delta as f64) / temperature).exp();
    rng.gen::<f64>() <= probability
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = 0;
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

/// Run simulated annealing from the greedy cover plus `⌊√n⌋` random extra
/// subsets.
///
/// # Errors
///
/// Returns [`SearchError::InvalidParameters`] if `params` fail validation.
pub fn simulated_annealing(
    instance: &Instance,
    params: &AnnealingParams,
    cutoff: Duration,
    seed: u64,
) -> Result<LocalOutcome, SearchError> {
    params.validate()?;
    let start = Instant::now();

    let Some(greedy) = greedy_cover(instance) else {
        info!("annealing skipped: instance is infeasible");
        return Ok(LocalOutcome::infeasible(start.elapsed()));
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let incidence = incidence(instance);

    let mut current = Coverage::from_chosen(instance, &greedy);
    let unselected: Vec<usize> = (0..instance.subset_count())
        .filter(|&i| !current.is_selected(i))
        .collect();
    let extra = integer_sqrt(instance.universe_size()).min(unselected.len());
    for &index in unselected.choose_multiple(&mut rng, extra) {
        current.add(instance, index);
    }

    let mut best = current.clone();
    let mut trace = AnytimeTrace::new();
    trace.record(start.elapsed(), best.size);

    let mut temperature = params.initial_temperature;
    let mut stalled = 1;
    let mut steps: u64 = 0;
    let mut termination = LocalTermination::Completed;

    while temperature > params.min_temperature {
        if start.elapsed() >= cutoff {
            termination = LocalTermination::CutoffReached;
            break;
        }
        let Some(mut candidate) = propose(&mut rng, &current, &incidence, params.sample_size)
        else {
            break;
        };
        let mut delta = flip_delta(&current, instance, candidate);
        let mut tries = 1;
        while tries < params.max_tries && !accepts(&mut rng, delta, temperature) {
            let Some(next) = propose(&mut rng, &current, &incidence, params.sample_size) else {
                break;
            };
            candidate = next;
            delta = flip_delta(&current, instance, candidate);
            tries += 1;
        }

        current.flip(instance, candidate);
        temperature *= params.cooling_rate;
        steps += 1;

        if current.is_cover() && current.size < best.size {
            best = current.clone();
            let elapsed = start.elapsed();
            trace.record(elapsed, best.size);
            debug!(
                "annealing improved to {} at step {steps}, T={temperature:.3}",
                best.size
            );
        }

        if current.size > best.size {
            if stalled >= params.restart_after {
                current = best.clone();
                stalled = 1;
            } else {
                stalled += 1;
            }
        }
    }

    let elapsed = start.elapsed();
    info!(
        "annealing finished ({termination:?}) after {steps} steps: best cost {}",
        best.size
    );
    Ok(LocalOutcome {
        termination,
        incumbent: Some(best.incumbent()),
        trace,
        elapsed,
    })
}
