//! Reproducible random instances for fixtures, tests and benchmarks.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use setcover_kernel::element_set::MAX_UNIVERSE_SIZE;
use setcover_kernel::instance::{Instance, InstanceError};

/// Shape of a generated instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthParams {
    pub universe_size: usize,
    pub subset_count: usize,
    /// Probability that a given element lands in a given subset.
    pub density: f64,
    /// When `false`, element `n` is withheld from every subset.
    pub feasible: bool,
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            universe_size: 20,
            subset_count: 12,
            density: 0.2,
            feasible: true,
        }
    }
}

/// Generate an instance from `params` and `seed`.
///
/// Feasible instances (with `subset_count > 0`) guarantee every element is in
/// at least one subset: uncovered elements are dropped into a random subset
/// after the density pass. Infeasible instances need `universe_size > 0`;
/// otherwise the result is trivially feasible.
///
/// # Errors
///
/// Returns [`InstanceError::UniverseTooLarge`] if `universe_size` exceeds
/// [`MAX_UNIVERSE_SIZE`].
pub fn random_instance(params: &SynthParams, seed: u64) -> Result<Instance, InstanceError> {
    let n = params.universe_size;
    if n > MAX_UNIVERSE_SIZE {
        return Err(InstanceError::UniverseTooLarge { universe_size: n });
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    let density = params.density.clamp(0.0, 1.0);
    let withheld = (!params.feasible && n > 0).then_some(n);

    // membership[s][e - 1]: element e is in subset s.
    let mut membership: Vec<Vec<bool>> = (0..params.subset_count)
        .map(|_| {
            (1..=n)
                .map(|element| Some(element) != withheld && rng.gen_bool(density))
                .collect()
        })
        .collect();

    if params.subset_count > 0 {
        for element in 1..=n {
            if Some(element) == withheld || membership.iter().any(|row| row[element - 1]) {
                continue;
            }
            let target = rng.gen_range(0..params.subset_count);
            membership[target][element - 1] = true;
        }
    }

    let subsets = membership.iter().map(|row| {
        row.iter()
            .enumerate()
            .filter(|(_, &member)| member)
            .map(|(offset, _)| offset + 1)
            .collect::<Vec<_>>()
    });

    Instance::new(n, subsets)
}
