//! Incumbent and anytime trace.
//!
//! The trace is an append-only log of `(elapsed, cost)` pairs. An entry is
//! appended only when the incumbent strictly improves, so costs are strictly
//! decreasing and elapsed times are non-decreasing along the log.

use std::time::Duration;

/// A complete cover: `chosen` subset indices (0-based) with `cost = chosen.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incumbent {
    pub cost: usize,
    pub chosen: Vec<usize>,
}

impl Incumbent {
    /// Build an incumbent from chosen indices; cost is the number of indices.
    #[must_use]
    pub fn from_chosen(chosen: Vec<usize>) -> Self {
        Self {
            cost: chosen.len(),
            chosen,
        }
    }

    /// Chosen indices in ascending order.
    #[must_use]
    pub fn sorted_chosen(&self) -> Vec<usize> {
        let mut chosen = self.chosen.clone();
        chosen.sort_unstable();
        chosen
    }
}

/// One improvement event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEntry {
    /// Wall-clock time since the run started.
    pub elapsed: Duration,
    /// Cost of the new incumbent.
    pub cost: usize,
}

/// Append-only improvement log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnytimeTrace {
    entries: Vec<TraceEntry>,
}

impl AnytimeTrace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `(elapsed, cost)` if `cost` strictly improves on the last entry.
    ///
    /// Returns `false` and leaves the log untouched if `cost` is not an
    /// improvement or `elapsed` would move time backwards.
    pub fn record(&mut self, elapsed: Duration, cost: usize) -> bool {
        if let Some(last) = self.entries.last() {
            if cost >= last.cost || elapsed < last.elapsed {
                return false;
            }
        }
        self.entries.push(TraceEntry { elapsed, cost });
        true
    }

    #[must_use]
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Cost of the latest (best) entry.
    #[must_use]
    pub fn best_cost(&self) -> Option<usize> {
        self.entries.last().map(|e| e.cost)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
