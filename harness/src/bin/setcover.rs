//! `setcover`: solve one instance with one algorithm and write its reports.
//!
//! Usage:
//!
//! ```text
//! setcover --inst data/test1.in --alg BnB --time 600 --seed 0 [--output-dir out] [--summary]
//! ```
//!
//! Writes `<instance>_<alg>_<cutoff>[_<seed>].sol` and `.trace` into the
//! output directory and prints one status line on stdout. Logging goes to
//! stderr.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{error, info, LevelFilter};
use setcover_harness::algorithm::Algorithm;
use setcover_harness::error::RunError;
use setcover_harness::report::{instance_name, report_stem, write_reports};
use setcover_harness::runner::{run, RunConfig};
use setcover_harness::summary::write_summary;
use setcover_kernel::parse::read_instance;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Anytime minimum set cover: branch and bound, greedy and local search",
    arg_required_else_help = true
)]
struct Args {
    /// The instance file: an `n m` header line, then one `k e_1 ... e_k`
    /// line per subset with elements in 1..=n.
    #[arg(long = "inst", verbatim_doc_comment)]
    instance_path: PathBuf,

    /// The algorithm to run.
    #[arg(long = "alg", value_enum)]
    algorithm: Algorithm,

    /// Wall-clock cutoff in seconds.
    #[arg(long = "time", default_value_t = 600)]
    cutoff_secs: u64,

    /// Random seed for LS1 and LS2; ignored by BnB and Approx.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Directory for the `.sol`, `.trace` and summary files.
    #[arg(long = "output-dir", default_value = ".")]
    output_dir: PathBuf,

    /// Stop BnB after this many node expansions.
    #[arg(long = "max-expansions")]
    max_expansions: Option<u64>,

    /// Also write `<stem>.summary.json`.
    #[arg(long)]
    summary: bool,

    /// Log progress at debug level.
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
}

fn execute(args: &Args) -> Result<(), RunError> {
    let instance = read_instance(&args.instance_path)?;
    info!(
        "loaded {} (n={}, m={}, {})",
        args.instance_path.display(),
        instance.universe_size(),
        instance.subset_count(),
        instance.digest()
    );

    let config = RunConfig {
        max_expansions: args.max_expansions,
        ..RunConfig::new(
            args.algorithm,
            Duration::from_secs(args.cutoff_secs),
            args.seed,
        )
    };
    let outcome = run(&instance, &config)?;

    let stem = report_stem(&instance_name(&args.instance_path), &config);
    let paths = write_reports(&args.output_dir, &stem, &outcome)?;
    info!("wrote {}", paths.solution.display());
    if args.summary {
        let path = write_summary(&args.output_dir, &stem, &instance, &config, &outcome)?;
        info!("wrote {}", path.display());
    }

    let cost = outcome
        .best_cost()
        .map_or_else(|| "-".to_string(), |cost| cost.to_string());
    println!("{stem} status={} cost={cost}", outcome.status.as_str());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    configure_logging(args.verbose);
    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
