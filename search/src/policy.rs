//! Search policy types.

use std::time::Duration;

use crate::error::SearchError;

/// Budget and numeric configuration for one branch-and-bound run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPolicy {
    /// Wall-clock cutoff, checked once per frontier pop.
    pub cutoff: Duration,
    /// Optional cap on node expansions; a clock-free budget.
    pub max_expansions: Option<u64>,
    /// Round-off guard for the strict admission test
    /// `estimate < incumbent − bound_tolerance`.
    pub bound_tolerance: f64,
}

impl SearchPolicy {
    /// Policy with the given cutoff and default everything else.
    #[must_use]
    pub fn with_cutoff(cutoff: Duration) -> Self {
        Self {
            cutoff,
            ..Self::default()
        }
    }

    /// Validate the numeric fields.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `bound_tolerance` is not a
    /// finite value in `[0, 0.5)`. Anything at or above one half could prune a
    /// node whose estimate is genuinely below the incumbent by less than one.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.bound_tolerance.is_finite()
            || self.bound_tolerance < 0.0
            || self.bound_tolerance >= 0.5
        {
            return Err(SearchError::InvalidPolicy {
                detail: format!(
                    "bound_tolerance must be finite and in [0, 0.5), got {}",
                    self.bound_tolerance
                ),
            });
        }
        Ok(())
    }

    /// Whether a child with `estimate` may still beat an incumbent of cost
    /// `incumbent`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn admits(&self, estimate: f64, incumbent: usize) -> bool {
        estimate < incumbent as f64 - self.bound_tolerance
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            cutoff: Duration::from_secs(600),
            max_expansions: None,
            bound_tolerance: 1e-9,
        }
    }
}
