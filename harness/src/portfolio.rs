//! Parallel portfolio of independent runs.
//!
//! Each configuration runs on its own scoped thread against the shared,
//! read-only instance. Runs share no incumbent, trace or frontier; results
//! are only compared after every thread has joined.

use log::info;
use setcover_kernel::instance::Instance;

use crate::error::RunError;
use crate::runner::{run, RunConfig, RunOutcome, RunStatus};

/// All runs in configuration order, plus the index of the best one.
#[derive(Debug, Clone)]
pub struct PortfolioOutcome {
    pub runs: Vec<RunOutcome>,
    /// Lowest cost; ties prefer a proven optimum, then the earlier config.
    /// `None` if every run found the instance infeasible.
    pub best: Option<usize>,
}

impl PortfolioOutcome {
    #[must_use]
    pub fn best_run(&self) -> Option<&RunOutcome> {
        self.best.map(|index| &self.runs[index])
    }
}

fn pick_best(runs: &[RunOutcome]) -> Option<usize> {
    runs.iter()
        .enumerate()
        .filter_map(|(index, run)| {
            run.best_cost()
                .map(|cost| (cost, run.status != RunStatus::Optimal, index))
        })
        .min()
        .map(|(_, _, index)| index)
}

/// Run every config in parallel and collect the outcomes.
///
/// # Errors
///
/// Returns [`RunError::EmptyPortfolio`] for an empty `configs`, or the first
/// (in config order) validation error of any run.
pub fn run_portfolio(
    instance: &Instance,
    configs: &[RunConfig],
) -> Result<PortfolioOutcome, RunError> {
    if configs.is_empty() {
        return Err(RunError::EmptyPortfolio);
    }

    let results: Vec<Result<RunOutcome, RunError>> = std::thread::scope(|scope| {
        let handles: Vec<_> = configs
            .iter()
            .map(|config| scope.spawn(move || run(instance, config)))
            .collect();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(payload) => std::panic::resume_unwind(payload),
            })
            .collect()
    });

    let runs = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    let best = pick_best(&runs);
    if let Some(index) = best {
        info!(
            "portfolio best: {} with cost {:?}",
            runs[index].algorithm,
            runs[index].best_cost()
        );
    }
    Ok(PortfolioOutcome { runs, best })
}
