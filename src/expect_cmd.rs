use anyhow::{Context, Result};
use tracing::info;

use tyche_chain::pattern_waiting_times;

use crate::cli::ExpectArgs;
use crate::config;

/// Run the full waiting-time grid and print one line per pattern.
pub fn run(args: ExpectArgs) -> Result<()> {
    // Step 1: Merge CLI flags over the optional TOML config.
    let file = match &args.config {
        Some(path) => config::load(path)?,
        None => Default::default(),
    };

    let alphabet_size = args
        .alphabet_size
        .or(file.expect.alphabet_size)
        .ok_or_else(|| {
            anyhow::anyhow!("no alphabet size: set [expect].alphabet_size in config or use -m")
        })?;
    let pattern_length = args
        .pattern_length
        .or(file.expect.pattern_length)
        .ok_or_else(|| {
            anyhow::anyhow!("no pattern length: set [expect].pattern_length in config or use -n")
        })?;

    // Step 2: Compute every pattern's expected waiting time.
    info!(alphabet_size, pattern_length, "computing waiting times");
    let results = pattern_waiting_times(alphabet_size, pattern_length)
        .context("waiting-time computation failed")?;
    info!(n_patterns = results.len(), "computation complete");

    // Step 3: Report.
    for (pattern, value) in &results {
        println!("E(X): [ {pattern} ] {value}");
    }
    Ok(())
}
