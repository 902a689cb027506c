//! `ElementSet`: a set of universe elements backed by a bitset.
//!
//! Elements are identified by `1..=universe_size`. Bit `0` is never set, so
//! the backing bitset has capacity `universe_size + 1` and element ids index
//! it directly.
//!
//! # Ownership
//!
//! Search nodes own their uncovered set outright. Branching clones the parent
//! set (copy-on-branch), which keeps every node's set logically independent.

use fixedbitset::FixedBitSet;

/// Largest universe an instance may declare.
pub const MAX_UNIVERSE_SIZE: usize = 1 << 24;

/// An element id outside `1..=universe_size` was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("element {element} is outside the universe 1..={universe_size}")]
pub struct ElementOutOfRange {
    pub element: usize,
    pub universe_size: usize,
}

/// A set of elements drawn from the universe `{1, ..., universe_size}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementSet {
    bits: FixedBitSet,
    universe_size: usize,
}

impl ElementSet {
    /// Empty set over a universe of `universe_size` elements.
    ///
    /// Callers building sets from untrusted sizes check them against
    /// [`MAX_UNIVERSE_SIZE`] first; [`Instance`](crate::instance::Instance)
    /// construction and the parser do.
    #[must_use]
    pub fn with_universe_size(universe_size: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(universe_size + 1),
            universe_size,
        }
    }

    /// The full universe `{1, ..., universe_size}`.
    #[must_use]
    pub fn full(universe_size: usize) -> Self {
        let mut set = Self::with_universe_size(universe_size);
        set.bits.insert_range(1..universe_size + 1);
        set
    }

    /// Build a set from element ids. Duplicates collapse.
    ///
    /// # Errors
    ///
    /// Returns [`ElementOutOfRange`] for the first element not in
    /// `1..=universe_size`.
    pub fn from_elements<I>(universe_size: usize, elements: I) -> Result<Self, ElementOutOfRange>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = Self::with_universe_size(universe_size);
        for element in elements {
            set.insert(element)?;
        }
        Ok(set)
    }

    /// Insert an element. Returns whether the element was newly added.
    ///
    /// # Errors
    ///
    /// Returns [`ElementOutOfRange`] if `element` is not in `1..=universe_size`.
    pub fn insert(&mut self, element: usize) -> Result<bool, ElementOutOfRange> {
        if element == 0 || element > self.universe_size {
            return Err(ElementOutOfRange {
                element,
                universe_size: self.universe_size,
            });
        }
        Ok(!self.bits.put(element))
    }

    /// Remove an element if present.
    pub fn remove(&mut self, element: usize) {
        if element <= self.universe_size {
            self.bits.set(element, false);
        }
    }

    #[must_use]
    pub fn contains(&self, element: usize) -> bool {
        self.bits.contains(element)
    }

    /// Number of elements in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// Size of the universe this set is drawn from.
    #[must_use]
    pub fn universe_size(&self) -> usize {
        self.universe_size
    }

    /// Elements in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.ones()
    }

    /// `self − other` as a new set.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.difference_with(other);
        out
    }

    /// Remove every element of `other` from `self`.
    pub fn difference_with(&mut self, other: &Self) {
        self.bits.difference_with(&other.bits);
    }

    /// Add every element of `other` to `self`.
    pub fn union_with(&mut self, other: &Self) {
        self.bits.union_with(&other.bits);
    }

    /// `self ∩ other` as a new set.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.bits.intersect_with(&other.bits);
        out
    }

    /// `|self ∩ other|` without allocating.
    #[must_use]
    pub fn intersection_len(&self, other: &Self) -> usize {
        self.bits.intersection(&other.bits).count()
    }

    /// Whether every element of `other` is in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.bits.is_superset(&other.bits)
    }
}
