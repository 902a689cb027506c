//! JSON run summary.
//!
//! One `<stem>.summary.json` per run. Keys are emitted in sorted order.
//! `summary_digest` hashes the reproducible projection only (instance digest,
//! configuration, status, cover), so two runs that report the same cover for
//! the same configuration share a digest even though their timings differ.

use std::path::{Path, PathBuf};

use setcover_kernel::digest::{canonical_hash, ContentHash, DOMAIN_RUN_SUMMARY};
use setcover_kernel::instance::Instance;

use crate::error::RunError;
use crate::runner::{RunConfig, RunOutcome};

pub const SUMMARY_SCHEMA_VERSION: &str = "run_summary.v1";

fn micros(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

fn one_based_chosen(outcome: &RunOutcome) -> Vec<usize> {
    outcome
        .incumbent
        .as_ref()
        .map(|inc| inc.sorted_chosen().into_iter().map(|i| i + 1).collect())
        .unwrap_or_default()
}

fn digest_basis(
    instance_digest: &ContentHash,
    config: &RunConfig,
    outcome: &RunOutcome,
) -> serde_json::Value {
    serde_json::json!({
        "algorithm": config.algorithm.as_str(),
        "best_cost": outcome.best_cost(),
        "chosen": one_based_chosen(outcome),
        "cutoff_micros": micros(config.cutoff),
        "instance_digest": instance_digest.as_str(),
        "max_expansions": config.max_expansions,
        "schema_version": SUMMARY_SCHEMA_VERSION,
        "seed": config.seed,
        "status": outcome.status.as_str(),
    })
}

/// Digest of the reproducible projection of a run.
///
/// # Errors
///
/// Returns [`RunError::Summary`] if serialisation fails.
pub fn summary_digest(
    instance: &Instance,
    config: &RunConfig,
    outcome: &RunOutcome,
) -> Result<ContentHash, RunError> {
    let basis = digest_basis(&instance.digest(), config, outcome);
    Ok(canonical_hash(DOMAIN_RUN_SUMMARY, &serde_json::to_vec(&basis)?))
}

/// Build the full summary document.
///
/// # Errors
///
/// Returns [`RunError::Summary`] if serialisation fails.
pub fn build_summary(
    instance: &Instance,
    config: &RunConfig,
    outcome: &RunOutcome,
) -> Result<serde_json::Value, RunError> {
    let instance_digest = instance.digest();
    let digest = summary_digest(instance, config, outcome)?;

    let trace: Vec<serde_json::Value> = outcome
        .trace
        .entries()
        .iter()
        .map(|entry| {
            serde_json::json!({
                "cost": entry.cost,
                "elapsed_micros": micros(entry.elapsed),
            })
        })
        .collect();

    let stats = outcome.stats.map(|stats| {
        serde_json::json!({
            "expansions": stats.expansions,
            "frontier_high_water": stats.frontier_high_water,
            "leaves_reached": stats.leaves_reached,
            "nodes_pruned": stats.nodes_pruned,
            "nodes_pushed": stats.nodes_pushed,
        })
    });

    Ok(serde_json::json!({
        "algorithm": config.algorithm.as_str(),
        "best_cost": outcome.best_cost(),
        "chosen": one_based_chosen(outcome),
        "cutoff_micros": micros(config.cutoff),
        "elapsed_micros": micros(outcome.elapsed),
        "instance_digest": instance_digest.as_str(),
        "max_expansions": config.max_expansions,
        "schema_version": SUMMARY_SCHEMA_VERSION,
        "seed": config.seed,
        "stats": stats,
        "status": outcome.status.as_str(),
        "subset_count": instance.subset_count(),
        "summary_digest": digest.as_str(),
        "trace": trace,
        "universe_size": instance.universe_size(),
    }))
}

/// Write `<stem>.summary.json` into `dir`.
///
/// # Errors
///
/// Returns [`RunError::Summary`] or [`RunError::Io`].
pub fn write_summary(
    dir: &Path,
    stem: &str,
    instance: &Instance,
    config: &RunConfig,
    outcome: &RunOutcome,
) -> Result<PathBuf, RunError> {
    let summary = build_summary(instance, config, outcome)?;
    let mut bytes = serde_json::to_vec_pretty(&summary)?;
    bytes.push(b'\n');

    std::fs::create_dir_all(dir).map_err(|e| RunError::io(dir, e))?;
    let path = dir.join(format!("{stem}.summary.json"));
    std::fs::write(&path, bytes).map_err(|e| RunError::io(&path, e))?;
    Ok(path)
}
