//! Search entry point and expansion loop.
//!
//! Anytime best-first branch and bound over the fixed subset order:
//!
//! ```text
//! greedy seed → push root
//!   loop: pop best → cutoff? → leaf? (record improvement)
//!         → exhausted or dominated? (drop)
//!         → branch include/exclude subsets[next_index], admit children
//!           whose estimate is strictly below the incumbent
//! ```
//!
//! An empty frontier certifies the incumbent as optimal. The clock is read
//! once per pop; a bound computation in flight is never interrupted.

use std::time::{Duration, Instant};

use log::{debug, info};
use setcover_kernel::instance::Instance;

use crate::bound::{fractional_lower_bound, initial_upper_bound, UpperBound};
use crate::error::SearchError;
use crate::frontier::BestFirstFrontier;
use crate::node::SearchNode;
use crate::policy::SearchPolicy;
use crate::trace::{AnytimeTrace, Incumbent};

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// Frontier exhausted: the incumbent is a minimum cover.
    OptimalityProven,
    /// Wall-clock cutoff reached: the incumbent is best-effort.
    CutoffReached,
    /// `max_expansions` reached: the incumbent is best-effort.
    ExpansionBudgetExceeded,
    /// No cover exists; the frontier loop never ran.
    Infeasible,
}

impl TerminationReason {
    /// Stable lowercase name for reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OptimalityProven => "optimality_proven",
            Self::CutoffReached => "cutoff_reached",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::Infeasible => "infeasible",
        }
    }
}

/// Counters gathered during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes that were branched on.
    pub expansions: u64,
    /// Nodes pushed onto the frontier, root included.
    pub nodes_pushed: u64,
    /// Children rejected by the admission test plus popped nodes discarded
    /// by the bound check.
    pub nodes_pruned: u64,
    /// Complete covers popped from the frontier.
    pub leaves_reached: u64,
    pub frontier_high_water: usize,
}

/// Result of a branch-and-bound run.
///
/// Always well-formed: `incumbent` is `Some` unless the instance is
/// infeasible, and `termination` says whether it is proven optimal.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub termination: TerminationReason,
    pub incumbent: Option<Incumbent>,
    pub trace: AnytimeTrace,
    pub stats: SearchStats,
    /// Total wall-clock time of the run.
    pub elapsed: Duration,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_proven_optimal(&self) -> bool {
        self.termination == TerminationReason::OptimalityProven
    }

    #[must_use]
    pub fn is_infeasible(&self) -> bool {
        self.termination == TerminationReason::Infeasible
    }

    #[must_use]
    pub fn best_cost(&self) -> Option<usize> {
        self.incumbent.as_ref().map(|inc| inc.cost)
    }
}

/// Run branch and bound on `instance` under `policy`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures. Every runtime termination is an `Ok` outcome.
#[allow(clippy::cast_precision_loss)]
pub fn search(instance: &Instance, policy: &SearchPolicy) -> Result<SearchOutcome, SearchError> {
    policy.validate()?;

    let start = Instant::now();
    let subsets = instance.subsets();
    let universe = instance.universe();
    let mut trace = AnytimeTrace::new();
    let mut stats = SearchStats::default();

    let mut incumbent = match initial_upper_bound(&universe, subsets) {
        UpperBound::Feasible(cover) => cover,
        UpperBound::Infeasible => {
            info!(
                "instance is infeasible: {} element(s) appear in no subset",
                instance.uncoverable_elements().len()
            );
            return Ok(SearchOutcome {
                termination: TerminationReason::Infeasible,
                incumbent: None,
                trace,
                stats,
                elapsed: start.elapsed(),
            });
        }
    };
    trace.record(start.elapsed(), incumbent.cost);
    debug!(
        "greedy seed: cost {} over {} subsets, universe {}",
        incumbent.cost,
        subsets.len(),
        instance.universe_size()
    );

    let mut frontier = BestFirstFrontier::new();
    let mut next_creation_order: u64 = 1;
    frontier.push(SearchNode::root(universe));
    stats.nodes_pushed += 1;

    let termination = loop {
        let Some(current) = frontier.pop() else {
            break TerminationReason::OptimalityProven;
        };

        if start.elapsed() >= policy.cutoff {
            break TerminationReason::CutoffReached;
        }
        if policy
            .max_expansions
            .is_some_and(|max| stats.expansions >= max)
        {
            break TerminationReason::ExpansionBudgetExceeded;
        }

        if current.is_leaf() {
            stats.leaves_reached += 1;
            if current.committed < incumbent.cost {
                let elapsed = start.elapsed();
                incumbent = Incumbent {
                    cost: current.committed,
                    chosen: current.chosen,
                };
                trace.record(elapsed, incumbent.cost);
                info!(
                    "incumbent improved to {} at {:.6}s",
                    incumbent.cost,
                    elapsed.as_secs_f64()
                );
            }
            continue;
        }

        if current.next_index >= subsets.len() || current.committed >= incumbent.cost {
            stats.nodes_pruned += 1;
            continue;
        }

        stats.expansions += 1;
        let index = current.next_index;
        let pool = &subsets[index + 1..];

        // Include subsets[index]. A subset that covers nothing new is
        // dominated by the exclude branch and never selected.
        if subsets[index].intersection_len(&current.uncovered) > 0 {
            let uncovered = current.uncovered.difference(&subsets[index]);
            let estimate =
                (current.committed + 1) as f64 + fractional_lower_bound(&uncovered, pool);
            if policy.admits(estimate, incumbent.cost) {
                let mut chosen = Vec::with_capacity(current.chosen.len() + 1);
                chosen.extend_from_slice(&current.chosen);
                chosen.push(index);
                frontier.push(SearchNode {
                    estimated_cost: estimate,
                    committed: current.committed + 1,
                    next_index: index + 1,
                    uncovered,
                    chosen,
                    creation_order: next_creation_order,
                });
                next_creation_order += 1;
                stats.nodes_pushed += 1;
            } else {
                stats.nodes_pruned += 1;
            }
        } else {
            stats.nodes_pruned += 1;
        }

        // Exclude subsets[index].
        let estimate = current.committed as f64 + fractional_lower_bound(&current.uncovered, pool);
        if policy.admits(estimate, incumbent.cost) {
            frontier.push(SearchNode {
                estimated_cost: estimate,
                committed: current.committed,
                next_index: index + 1,
                uncovered: current.uncovered,
                chosen: current.chosen,
                creation_order: next_creation_order,
            });
            next_creation_order += 1;
            stats.nodes_pushed += 1;
        } else {
            stats.nodes_pruned += 1;
        }
    };

    stats.frontier_high_water = frontier.high_water();
    let elapsed = start.elapsed();
    info!(
        "search terminated ({}): best cost {} after {:.6}s",
        termination.as_str(),
        incumbent.cost,
        elapsed.as_secs_f64()
    );
    debug!(
        "expansions={} pushed={} pruned={} leaves={} frontier_high_water={}",
        stats.expansions,
        stats.nodes_pushed,
        stats.nodes_pruned,
        stats.leaves_reached,
        stats.frontier_high_water
    );

    Ok(SearchOutcome {
        termination,
        incumbent: Some(incumbent),
        trace,
        stats,
        elapsed,
    })
}
