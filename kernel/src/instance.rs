//! `Instance`: a universe `{1..=n}` and an ordered collection of subsets.
//!
//! Subsets are indexed `0..m` in input order; that order is the branching
//! order used by the search. Instances are immutable once built.

use crate::element_set::{ElementOutOfRange, ElementSet, MAX_UNIVERSE_SIZE};

/// Error constructing an [`Instance`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstanceError {
    /// A subset names an element outside the universe.
    #[error("subset {subset}: {source}")]
    ElementOutOfRange {
        subset: usize,
        #[source]
        source: ElementOutOfRange,
    },
    #[error(
        "universe size {universe_size} exceeds the maximum {max}",
        max = MAX_UNIVERSE_SIZE
    )]
    UniverseTooLarge { universe_size: usize },
    #[error("subset {subset} was built for universe size {found}, expected {expected}")]
    UniverseMismatch {
        subset: usize,
        expected: usize,
        found: usize,
    },
}

fn check_universe_size(universe_size: usize) -> Result<(), InstanceError> {
    if universe_size > MAX_UNIVERSE_SIZE {
        return Err(InstanceError::UniverseTooLarge { universe_size });
    }
    Ok(())
}

/// A minimum set-cover instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    universe_size: usize,
    subsets: Vec<ElementSet>,
}

impl Instance {
    /// Build an instance from per-subset element lists.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::UniverseTooLarge`] above
    /// [`MAX_UNIVERSE_SIZE`], or [`InstanceError::ElementOutOfRange`] if any
    /// element is not in `1..=universe_size`.
    pub fn new<S>(universe_size: usize, subsets: S) -> Result<Self, InstanceError>
    where
        S: IntoIterator,
        S::Item: IntoIterator<Item = usize>,
    {
        check_universe_size(universe_size)?;
        let subsets = subsets
            .into_iter()
            .enumerate()
            .map(|(subset, elements)| {
                ElementSet::from_elements(universe_size, elements)
                    .map_err(|source| InstanceError::ElementOutOfRange { subset, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            universe_size,
            subsets,
        })
    }

    /// Build an instance from already-constructed sets.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::UniverseTooLarge`] above
    /// [`MAX_UNIVERSE_SIZE`], or [`InstanceError::UniverseMismatch`] for the
    /// first set built over a different universe size.
    pub fn from_sets(
        universe_size: usize,
        subsets: Vec<ElementSet>,
    ) -> Result<Self, InstanceError> {
        check_universe_size(universe_size)?;
        if let Some((subset, set)) = subsets
            .iter()
            .enumerate()
            .find(|(_, set)| set.universe_size() != universe_size)
        {
            return Err(InstanceError::UniverseMismatch {
                subset,
                expected: universe_size,
                found: set.universe_size(),
            });
        }
        Ok(Self {
            universe_size,
            subsets,
        })
    }

    #[must_use]
    pub fn universe_size(&self) -> usize {
        self.universe_size
    }

    /// The full universe as a fresh set.
    #[must_use]
    pub fn universe(&self) -> ElementSet {
        ElementSet::full(self.universe_size)
    }

    #[must_use]
    pub fn subset_count(&self) -> usize {
        self.subsets.len()
    }

    #[must_use]
    pub fn subset(&self, index: usize) -> &ElementSet {
        &self.subsets[index]
    }

    #[must_use]
    pub fn subsets(&self) -> &[ElementSet] {
        &self.subsets
    }

    /// Elements left uncovered after selecting `chosen`.
    #[must_use]
    pub fn uncovered_after(&self, chosen: &[usize]) -> ElementSet {
        let mut uncovered = self.universe();
        for &index in chosen {
            uncovered.difference_with(&self.subsets[index]);
        }
        uncovered
    }

    /// Whether `chosen` covers the whole universe. Out-of-range indices make
    /// the selection invalid.
    #[must_use]
    pub fn is_cover(&self, chosen: &[usize]) -> bool {
        chosen.iter().all(|&i| i < self.subsets.len()) && self.uncovered_after(chosen).is_empty()
    }

    /// Elements that appear in no subset. Non-empty iff no cover exists.
    #[must_use]
    pub fn uncoverable_elements(&self) -> ElementSet {
        let all: Vec<usize> = (0..self.subsets.len()).collect();
        self.uncovered_after(&all)
    }
}
