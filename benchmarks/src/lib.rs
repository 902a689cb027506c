//! Shared helpers for setcover benchmark suites.
//!
//! A regime is a generated instance plus the policy it is searched under.
//! Every regime uses an expansion cap so timings measure a fixed amount of
//! work rather than a wall-clock race.

use std::time::Duration;

use setcover_harness::synth::{random_instance, SynthParams};
use setcover_kernel::instance::Instance;
use setcover_search::policy::SearchPolicy;
use setcover_search::search::{search, SearchOutcome};

/// Generous wall-clock cutoff; the expansion cap is what binds.
const REGIME_CUTOFF: Duration = Duration::from_secs(300);

/// A named benchmark workload.
pub struct Regime {
    pub name: &'static str,
    pub instance: Instance,
    pub policy: SearchPolicy,
}

fn regime(name: &'static str, params: &SynthParams, seed: u64, max_expansions: u64) -> Regime {
    Regime {
        name,
        instance: random_instance(params, seed).expect("regime universe is small"),
        policy: SearchPolicy {
            max_expansions: Some(max_expansions),
            ..SearchPolicy::with_cutoff(REGIME_CUTOFF)
        },
    }
}

/// Few large subsets: bounds are tight and the search finishes early.
#[must_use]
pub fn regime_dense() -> Regime {
    let params = SynthParams {
        universe_size: 60,
        subset_count: 30,
        density: 0.35,
        feasible: true,
    };
    regime("dense", &params, 11, 20_000)
}

/// Many small subsets: weak bounds and a wide frontier.
#[must_use]
pub fn regime_sparse() -> Regime {
    let params = SynthParams {
        universe_size: 80,
        subset_count: 60,
        density: 0.06,
        feasible: true,
    };
    regime("sparse", &params, 23, 20_000)
}

/// Larger instance that exhausts the expansion cap.
#[must_use]
pub fn regime_budget_limited() -> Regime {
    let params = SynthParams {
        universe_size: 200,
        subset_count: 120,
        density: 0.04,
        feasible: true,
    };
    regime("budget_limited", &params, 37, 5_000)
}

/// Infeasible: terminates after the greedy pass.
#[must_use]
pub fn regime_infeasible() -> Regime {
    let params = SynthParams {
        universe_size: 200,
        subset_count: 120,
        density: 0.04,
        feasible: false,
    };
    regime("infeasible", &params, 41, 5_000)
}

#[must_use]
pub fn all_regimes() -> Vec<Regime> {
    vec![
        regime_dense(),
        regime_sparse(),
        regime_budget_limited(),
        regime_infeasible(),
    ]
}

/// Run branch and bound on a regime.
///
/// # Panics
///
/// Panics if the regime policy is invalid. Benchmark setup failures are fatal.
#[must_use]
pub fn run_regime(regime: &Regime) -> SearchOutcome {
    search(&regime.instance, &regime.policy).expect("regime policy is valid")
}
