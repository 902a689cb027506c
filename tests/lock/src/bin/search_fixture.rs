//! Binary that runs branch and bound on the fixed cross-process instance
//! and prints deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: key=value lines. Timing is never printed.

use std::time::Duration;

use lock_tests::fixtures::crossproc_instance;
use setcover_search::policy::SearchPolicy;
use setcover_search::search::search;

fn main() {
    let instance = crossproc_instance();
    let policy = SearchPolicy::with_cutoff(Duration::from_secs(600));
    let outcome = search(&instance, &policy).expect("default policy is valid");

    let incumbent = outcome.incumbent.as_ref().expect("fixture is feasible");
    let chosen: Vec<String> = incumbent
        .sorted_chosen()
        .iter()
        .map(ToString::to_string)
        .collect();
    let trace_costs: Vec<String> = outcome
        .trace
        .entries()
        .iter()
        .map(|e| e.cost.to_string())
        .collect();

    println!("instance_digest={}", instance.digest());
    println!("termination_reason={}", outcome.termination.as_str());
    println!("best_cost={}", incumbent.cost);
    println!("chosen={}", chosen.join(","));
    println!("trace_costs={}", trace_costs.join(","));
    println!("expansions={}", outcome.stats.expansions);
    println!("nodes_pushed={}", outcome.stats.nodes_pushed);
    println!("nodes_pruned={}", outcome.stats.nodes_pruned);
    println!("frontier_high_water={}", outcome.stats.frontier_high_water);
}
