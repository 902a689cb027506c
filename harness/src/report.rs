//! Solution and trace files.
//!
//! ```text
//! <dir>/<instance>_<alg>_<cutoff>[_<seed>].sol     cost, then 1-based indices
//! <dir>/<instance>_<alg>_<cutoff>[_<seed>].trace   "<elapsed_secs> <cost>" per line
//! ```
//!
//! The seed suffix appears only for randomized algorithms. Subset indices are
//! 0-based inside the crates and shifted to 1-based only here, matching the
//! instance format.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::time::Duration;

use setcover_search::trace::{AnytimeTrace, Incumbent};

use crate::error::RunError;
use crate::runner::{RunConfig, RunOutcome};

/// First line of the solution file when no cover exists.
pub const INFEASIBLE_MARKER: &str = "infeasible";

/// Paths written by [`write_reports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub solution: PathBuf,
    pub trace: PathBuf,
}

/// Instance name used in file stems: the file name without its extension.
#[must_use]
pub fn instance_name(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| "instance".to_string(), |s| s.to_string_lossy().into_owned())
}

/// Whole seconds print without a fractional part.
fn format_cutoff(cutoff: Duration) -> String {
    if cutoff.subsec_nanos() == 0 {
        cutoff.as_secs().to_string()
    } else {
        cutoff.as_secs_f64().to_string()
    }
}

/// `<instance>_<alg>_<cutoff>` plus `_<seed>` for randomized algorithms.
#[must_use]
pub fn report_stem(instance: &str, config: &RunConfig) -> String {
    let mut stem = format!(
        "{instance}_{}_{}",
        config.algorithm,
        format_cutoff(config.cutoff)
    );
    if config.algorithm.is_randomized() {
        let _ = write!(stem, "_{}", config.seed);
    }
    stem
}

/// Solution file contents.
#[must_use]
pub fn solution_text(incumbent: Option<&Incumbent>) -> String {
    let Some(incumbent) = incumbent else {
        return format!("{INFEASIBLE_MARKER}\n\n");
    };
    let indices: Vec<String> = incumbent
        .sorted_chosen()
        .into_iter()
        .map(|index| (index + 1).to_string())
        .collect();
    format!("{}\n{}\n", incumbent.cost, indices.join(" "))
}

/// Trace file contents, one improvement per line in chronological order.
#[must_use]
pub fn trace_text(trace: &AnytimeTrace) -> String {
    let mut out = String::new();
    for entry in trace.entries() {
        let _ = writeln!(out, "{:.6} {}", entry.elapsed.as_secs_f64(), entry.cost);
    }
    out
}

/// Write `<stem>.sol` and `<stem>.trace` into `dir`, creating it if needed.
///
/// # Errors
///
/// Returns [`RunError::Io`] naming the path that could not be written.
pub fn write_reports(
    dir: &Path,
    stem: &str,
    outcome: &RunOutcome,
) -> Result<ReportPaths, RunError> {
    std::fs::create_dir_all(dir).map_err(|e| RunError::io(dir, e))?;

    let solution = dir.join(format!("{stem}.sol"));
    std::fs::write(&solution, solution_text(outcome.incumbent.as_ref()))
        .map_err(|e| RunError::io(&solution, e))?;

    let trace = dir.join(format!("{stem}.trace"));
    std::fs::write(&trace, trace_text(&outcome.trace)).map_err(|e| RunError::io(&trace, e))?;

    Ok(ReportPaths { solution, trace })
}
