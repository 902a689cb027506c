//! Setcover Harness: run orchestration around the search crate.
//!
//! The harness selects an algorithm, runs it under a cutoff, and writes the
//! solution, trace and summary files. It implements no search logic itself;
//! every algorithm lives in `setcover_search`.
//!
//! ```text
//! read_instance → RunConfig → runner::run → report::write_reports
//!                                         → summary::write_summary
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithm;
pub mod error;
pub mod portfolio;
pub mod report;
pub mod runner;
pub mod summary;
pub mod synth;
