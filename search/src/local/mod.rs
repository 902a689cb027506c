//! Local-search alternatives to branch and bound.
//!
//! Neither algorithm proves optimality. Both start from the greedy cover,
//! keep their own incumbent and trace, and are reproducible for a seed.

pub mod anneal;
pub mod hill_climb;

use std::time::Duration;

use setcover_kernel::instance::Instance;

use crate::bound::{initial_upper_bound, UpperBound};
use crate::trace::{AnytimeTrace, Incumbent};

/// Why a local search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalTermination {
    /// The schedule ran to completion.
    Completed,
    CutoffReached,
    /// No cover exists.
    Infeasible,
}

/// Best cover found by a local search, with its improvement log.
#[derive(Debug, Clone)]
pub struct LocalOutcome {
    pub termination: LocalTermination,
    pub incumbent: Option<Incumbent>,
    pub trace: AnytimeTrace,
    pub elapsed: Duration,
}

impl LocalOutcome {
    fn infeasible(elapsed: Duration) -> Self {
        Self {
            termination: LocalTermination::Infeasible,
            incumbent: None,
            trace: AnytimeTrace::new(),
            elapsed,
        }
    }

    #[must_use]
    pub fn best_cost(&self) -> Option<usize> {
        self.incumbent.as_ref().map(|inc| inc.cost)
    }
}

fn greedy_cover(instance: &Instance) -> Option<Vec<usize>> {
    match initial_upper_bound(&instance.universe(), instance.subsets()) {
        UpperBound::Feasible(cover) => Some(cover.chosen),
        UpperBound::Infeasible => None,
    }
}

/// Per-element cover counts for a selection of subsets.
#[derive(Debug, Clone)]
struct Coverage {
    /// `counts[e]` = selected subsets containing `e`; slot 0 unused.
    counts: Vec<usize>,
    selected: Vec<bool>,
    size: usize,
    uncovered: usize,
}

impl Coverage {
    fn from_chosen(instance: &Instance, chosen: &[usize]) -> Self {
        let mut coverage = Self {
            counts: vec![0; instance.universe_size() + 1],
            selected: vec![false; instance.subset_count()],
            size: 0,
            uncovered: instance.universe_size(),
        };
        for &index in chosen {
            coverage.add(instance, index);
        }
        coverage
    }

    fn add(&mut self, instance: &Instance, index: usize) {
        if self.selected[index] {
            return;
        }
        self.selected[index] = true;
        self.size += 1;
        for element in instance.subset(index).iter() {
            if self.counts[element] == 0 {
                self.uncovered -= 1;
            }
            self.counts[element] += 1;
        }
    }

    fn remove(&mut self, instance: &Instance, index: usize) {
        if !self.selected[index] {
            return;
        }
        self.selected[index] = false;
        self.size -= 1;
        for element in instance.subset(index).iter() {
            self.counts[element] -= 1;
            if self.counts[element] == 0 {
                self.uncovered += 1;
            }
        }
    }

    fn flip(&mut self, instance: &Instance, index: usize) {
        if self.selected[index] {
            self.remove(instance, index);
        } else {
            self.add(instance, index);
        }
    }

    fn is_cover(&self) -> bool {
        self.uncovered == 0
    }

    fn is_selected(&self, index: usize) -> bool {
        self.selected[index]
    }

    /// Every element of `subsets[index]` is covered at least twice.
    fn is_redundant(&self, instance: &Instance, index: usize) -> bool {
        self.selected[index] && instance.subset(index).iter().all(|e| self.counts[e] >= 2)
    }

    /// Selected indices, ascending.
    fn chosen(&self) -> Vec<usize> {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(index, &on)| on.then_some(index))
            .collect()
    }

    fn incumbent(&self) -> Incumbent {
        Incumbent::from_chosen(self.chosen())
    }
}
