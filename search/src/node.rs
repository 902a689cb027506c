//! Frontier node and its ordering key.

use std::cmp::Ordering;

use setcover_kernel::element_set::ElementSet;

/// One frontier node: a partial selection over subsets `0..next_index`.
///
/// Invariants:
/// - `uncovered = universe − ⋃ subsets[chosen]`
/// - `committed == chosen.len()`
/// - every index in `chosen` is `< next_index`
/// - `estimated_cost >= committed`
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// `committed` plus an admissible bound on the remaining cost.
    pub estimated_cost: f64,
    /// Number of subsets selected so far.
    pub committed: usize,
    /// Next subset index to branch on.
    pub next_index: usize,
    /// Elements not covered by `chosen`.
    pub uncovered: ElementSet,
    /// Selected subset indices, ascending.
    pub chosen: Vec<usize>,
    /// Global counter for deterministic tie-breaking.
    pub creation_order: u64,
}

impl SearchNode {
    /// The root: nothing chosen, everything uncovered, estimate 0.
    #[must_use]
    pub fn root(universe: ElementSet) -> Self {
        Self {
            estimated_cost: 0.0,
            committed: 0,
            next_index: 0,
            uncovered: universe,
            chosen: Vec::new(),
            creation_order: 0,
        }
    }

    /// A node with nothing left to cover is a complete cover.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.uncovered.is_empty()
    }
}

/// The frontier ordering key.
///
/// Lower `estimated_cost` first; ties prefer more `committed` subsets (closer
/// to a leaf), then lower `next_index`, then older `creation_order`.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub estimated_cost: f64,
    pub committed: usize,
    pub next_index: usize,
    pub creation_order: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.estimated_cost
            .total_cmp(&other.estimated_cost)
            .then(other.committed.cmp(&self.committed))
            .then(self.next_index.cmp(&other.next_index))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl From<&SearchNode> for FrontierKey {
    fn from(node: &SearchNode) -> Self {
        Self {
            estimated_cost: node.estimated_cost,
            committed: node.committed,
            next_index: node.next_index,
            creation_order: node.creation_order,
        }
    }
}
