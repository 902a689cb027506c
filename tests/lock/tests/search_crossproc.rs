//! Cross-process determinism for branch and bound.
//!
//! Spawns the `search_fixture` binary under several environment variants and
//! asserts identical output, then checks the output against an in-process
//! run of the same search.

use std::path::Path;
use std::process::Command;
use std::time::Duration;

use lock_tests::fixtures::crossproc_instance;
use lock_tests::oracle;
use setcover_search::policy::SearchPolicy;
use setcover_search::search::search;

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

/// Run the fixture binary with the given cwd and environment overrides.
/// Returns stdout as a string.
fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_search_fixture");

    let mut command = Command::new(bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn field<'a>(output: &'a str, key: &str) -> &'a str {
    output
        .lines()
        .find_map(|line| line.strip_prefix(key)?.strip_prefix('='))
        .unwrap_or_else(|| panic!("missing {key} in output:\n{output}"))
}

#[test]
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);
    assert!(baseline.contains("instance_digest=sha256:"));

    let alt_cwd = std::env::temp_dir();
    let variant_cwd = run_variant(&alt_cwd.to_string_lossy(), &[]);
    assert_eq!(baseline, variant_cwd, "output differs when cwd changes");

    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    let variant_noise = run_variant(
        &root,
        &[
            ("SETCOVER_NOISE", "should_not_matter"),
            ("TZ", "America/New_York"),
            ("RUST_LOG", "trace"),
        ],
    );
    assert_eq!(baseline, variant_noise, "output differs with spurious env vars");
}

#[test]
fn crossproc_output_matches_inprocess_search() {
    let output = run_variant(&workspace_root(), &[]);

    let instance = crossproc_instance();
    let outcome = search(&instance, &SearchPolicy::with_cutoff(Duration::from_secs(600))).unwrap();
    let incumbent = outcome.incumbent.unwrap();

    assert_eq!(field(&output, "termination_reason"), "optimality_proven");
    assert_eq!(field(&output, "instance_digest"), instance.digest().as_str());
    assert_eq!(field(&output, "best_cost"), incumbent.cost.to_string());
    assert_eq!(
        field(&output, "expansions"),
        outcome.stats.expansions.to_string()
    );

    let chosen: Vec<usize> = field(&output, "chosen")
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().unwrap())
        .collect();
    assert!(instance.is_cover(&chosen));
    assert_eq!(chosen, incumbent.sorted_chosen());
}

#[test]
fn crossproc_instance_is_small_enough_for_oracle() {
    let instance = crossproc_instance();
    assert!(instance.subset_count() <= oracle::MAX_ORACLE_POOL);
    let output = run_variant(&workspace_root(), &[]);
    assert_eq!(
        field(&output, "best_cost"),
        oracle::optimum(&instance).unwrap().to_string()
    );
}
