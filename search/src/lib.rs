//! Setcover Search: anytime best-first branch and bound for minimum set cover.
//!
//! This crate depends only on `setcover_kernel`. It does NOT depend on
//! `setcover_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! setcover_kernel  ←  setcover_search  ←  setcover_harness
//! (instance model)    (bounds, frontier,   (runner, reports,
//!                      engine, local)       portfolio, CLI)
//! ```
//!
//! # Key types
//!
//! - [`search::search`] -- the branch-and-bound entry point
//! - [`node::SearchNode`] -- partial selection with deterministic ordering key
//! - [`frontier::BestFirstFrontier`] -- lowest-estimate-first priority queue
//! - [`bound`] -- greedy upper bound and admissible fractional lower bound
//! - [`trace::AnytimeTrace`] -- strictly improving `(elapsed, cost)` log
//! - [`policy::SearchPolicy`] -- cutoff, expansion budget, bound tolerance
//! - [`local`] -- simulated annealing and hill climbing alternatives

#![forbid(unsafe_code)]

pub mod bound;
pub mod error;
pub mod frontier;
pub mod local;
pub mod node;
pub mod policy;
pub mod search;
pub mod trace;
