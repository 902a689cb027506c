//! Harness runner: dispatches one configured run to the search crate.
//!
//! # Pipeline
//!
//! ```text
//! RunConfig → validate → [BnB | Approx | LS1 | LS2] → RunOutcome
//! ```
//!
//! The runner owns no algorithmic logic. It maps each algorithm's own
//! termination into a [`RunStatus`] so callers can always tell a proven
//! optimum from a best-effort answer.

use std::time::{Duration, Instant};

use log::info;
use setcover_kernel::instance::Instance;
use setcover_search::bound::{initial_upper_bound, UpperBound};
use setcover_search::local::anneal::{simulated_annealing, AnnealingParams};
use setcover_search::local::hill_climb::{hill_climbing, HillClimbParams};
use setcover_search::local::{LocalOutcome, LocalTermination};
use setcover_search::policy::SearchPolicy;
use setcover_search::search::{search, SearchStats, TerminationReason};
use setcover_search::trace::{AnytimeTrace, Incumbent};

use crate::algorithm::Algorithm;
use crate::error::RunError;

/// Everything needed to reproduce one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub algorithm: Algorithm,
    pub cutoff: Duration,
    /// Seed for the local searches; ignored by `BnB` and `Approx`.
    pub seed: u64,
    /// Optional `BnB` expansion cap.
    pub max_expansions: Option<u64>,
    pub annealing: AnnealingParams,
    pub hill_climb: HillClimbParams,
}

impl RunConfig {
    /// Config with default algorithm parameters.
    #[must_use]
    pub fn new(algorithm: Algorithm, cutoff: Duration, seed: u64) -> Self {
        Self {
            algorithm,
            cutoff,
            seed,
            max_expansions: None,
            annealing: AnnealingParams::default(),
            hill_climb: HillClimbParams::default(),
        }
    }

    /// The branch-and-bound policy this config implies.
    #[must_use]
    pub fn search_policy(&self) -> SearchPolicy {
        SearchPolicy {
            cutoff: self.cutoff,
            max_expansions: self.max_expansions,
            ..SearchPolicy::default()
        }
    }
}

/// How much the reported cover can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Branch and bound exhausted its frontier: the cover is minimum.
    Optimal,
    /// Branch and bound stopped on its cutoff or expansion budget.
    TimeLimited,
    /// A heuristic algorithm; no optimality claim.
    Heuristic,
    /// No cover exists.
    Infeasible,
}

impl RunStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::TimeLimited => "time_limited",
            Self::Heuristic => "heuristic",
            Self::Infeasible => "infeasible",
        }
    }
}

/// Result of [`run`].
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub algorithm: Algorithm,
    pub status: RunStatus,
    /// `None` iff `status` is [`RunStatus::Infeasible`].
    pub incumbent: Option<Incumbent>,
    pub trace: AnytimeTrace,
    /// Branch-and-bound counters; `None` for the other algorithms.
    pub stats: Option<SearchStats>,
    pub elapsed: Duration,
}

impl RunOutcome {
    #[must_use]
    pub fn best_cost(&self) -> Option<usize> {
        self.incumbent.as_ref().map(|inc| inc.cost)
    }
}

/// Run `config.algorithm` on `instance`.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the policy or parameters fail validation.
pub fn run(instance: &Instance, config: &RunConfig) -> Result<RunOutcome, RunError> {
    info!(
        "running {} (cutoff {:?}, seed {}) on n={} m={}",
        config.algorithm,
        config.cutoff,
        config.seed,
        instance.universe_size(),
        instance.subset_count()
    );
    let outcome = match config.algorithm {
        Algorithm::BnB => run_branch_and_bound(instance, config)?,
        Algorithm::Approx => run_greedy(instance),
        Algorithm::LS1 => from_local(
            Algorithm::LS1,
            simulated_annealing(instance, &config.annealing, config.cutoff, config.seed)?,
        ),
        Algorithm::LS2 => from_local(
            Algorithm::LS2,
            hill_climbing(instance, &config.hill_climb, config.cutoff, config.seed)?,
        ),
    };
    info!(
        "{} finished: status {}, best cost {:?}",
        outcome.algorithm,
        outcome.status.as_str(),
        outcome.best_cost()
    );
    Ok(outcome)
}

fn run_branch_and_bound(instance: &Instance, config: &RunConfig) -> Result<RunOutcome, RunError> {
    let outcome = search(instance, &config.search_policy())?;
    let status = match outcome.termination {
        TerminationReason::OptimalityProven => RunStatus::Optimal,
        TerminationReason::CutoffReached | TerminationReason::ExpansionBudgetExceeded => {
            RunStatus::TimeLimited
        }
        TerminationReason::Infeasible => RunStatus::Infeasible,
    };
    Ok(RunOutcome {
        algorithm: Algorithm::BnB,
        status,
        incumbent: outcome.incumbent,
        trace: outcome.trace,
        stats: Some(outcome.stats),
        elapsed: outcome.elapsed,
    })
}

fn run_greedy(instance: &Instance) -> RunOutcome {
    let start = Instant::now();
    let mut trace = AnytimeTrace::new();
    let (status, incumbent) = match initial_upper_bound(&instance.universe(), instance.subsets()) {
        UpperBound::Feasible(cover) => {
            trace.record(start.elapsed(), cover.cost);
            (RunStatus::Heuristic, Some(cover))
        }
        UpperBound::Infeasible => (RunStatus::Infeasible, None),
    };
    RunOutcome {
        algorithm: Algorithm::Approx,
        status,
        incumbent,
        trace,
        stats: None,
        elapsed: start.elapsed(),
    }
}

fn from_local(algorithm: Algorithm, outcome: LocalOutcome) -> RunOutcome {
    let status = match outcome.termination {
        LocalTermination::Completed | LocalTermination::CutoffReached => RunStatus::Heuristic,
        LocalTermination::Infeasible => RunStatus::Infeasible,
    };
    RunOutcome {
        algorithm,
        status,
        incumbent: outcome.incumbent,
        trace: outcome.trace,
        stats: None,
        elapsed: outcome.elapsed,
    }
}
