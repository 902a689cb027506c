//! Named instances shared by the lock tests.

use setcover_harness::synth::{random_instance, SynthParams};
use setcover_kernel::instance::Instance;

/// Universe `{1..5}`, subsets `[{1,2,3}, {2,4}, {3,4,5}, {5}]`; optimum
/// `{0, 2}` with cost 2, which greedy already finds.
///
/// # Panics
///
/// Never: the literal is well-formed.
#[must_use]
pub fn worked_example() -> Instance {
    Instance::new(5, vec![vec![1, 2, 3], vec![2, 4], vec![3, 4, 5], vec![5]])
        .expect("well-formed literal")
}

/// Greedy is drawn to the overlapping `{1,2,4,5}` and needs 3 subsets; the
/// optimum `{0, 1}` needs 2.
///
/// # Panics
///
/// Never: the literal is well-formed.
#[must_use]
pub fn decoy() -> Instance {
    Instance::new(6, vec![vec![1, 2, 3], vec![4, 5, 6], vec![1, 2, 4, 5]])
        .expect("well-formed literal")
}

/// Element 3 appears in no subset.
///
/// # Panics
///
/// Never: the literal is well-formed.
#[must_use]
pub fn infeasible() -> Instance {
    Instance::new(3, vec![vec![1], vec![1, 2]]).expect("well-formed literal")
}

/// A family of small random instances the oracle can solve quickly.
///
/// # Panics
///
/// Never: the generated universe is far below the size cap.
#[must_use]
pub fn small_random(seed: u64) -> Instance {
    let params = SynthParams {
        universe_size: 8 + usize::try_from(seed % 7).unwrap_or(0),
        subset_count: 6 + usize::try_from(seed % 9).unwrap_or(0),
        density: 0.15 + 0.05 * f64::from(u32::try_from(seed % 5).unwrap_or(0)),
        feasible: true,
    };
    random_instance(&params, seed).expect("small universe")
}

/// The instance the `search_fixture` binary solves.
///
/// # Panics
///
/// Never: the generated universe is far below the size cap.
#[must_use]
pub fn crossproc_instance() -> Instance {
    let params = SynthParams {
        universe_size: 30,
        subset_count: 18,
        density: 0.15,
        feasible: true,
    };
    random_instance(&params, 20_240_601).expect("small universe")
}
