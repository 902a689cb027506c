//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (optimality proven, cutoff, budget, infeasibility) are expressed via
//! [`crate::search::TerminationReason`] and always carry a result.

/// Typed failure for pre-flight validation of policies and parameters.
///
/// Returned before any search step is taken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The branch-and-bound policy is unusable.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// Local search parameters are out of range.
    #[error("invalid local search parameters: {detail}")]
    InvalidParameters { detail: String },
}
