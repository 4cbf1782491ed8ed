use anyhow::{Result, bail};

use tyche_chain::{Pattern, display_rows, probability_matrix, transition_counts, waiting_time};

use crate::cli::MatrixArgs;

/// Print the count-form and probability transition matrices for one pattern.
pub fn run(args: MatrixArgs) -> Result<()> {
    let symbols = parse_pattern(&args.pattern)?;
    let pattern = Pattern::new(symbols, args.alphabet_size)?;
    let counts = transition_counts(&pattern);

    println!("Pattern: [ {pattern} ]");
    println!();

    println!("Transition counts (over {} symbols):", pattern.alphabet_size());
    for row in display_rows(&counts) {
        println!("  [ {} ]", row.join(", "));
    }
    println!();

    println!("Probability matrix:");
    let prob = probability_matrix(&counts);
    for i in 0..prob.rows() {
        let cells: Vec<String> = prob.row(i).iter().map(|v| format!("{v:.4}")).collect();
        println!("  [ {} ]", cells.join(", "));
    }
    println!();

    println!("E(X): {}", waiting_time(&pattern)?);
    Ok(())
}

/// Parse a pattern given as a string of decimal digits.
fn parse_pattern(text: &str) -> Result<Vec<u8>> {
    if text.is_empty() {
        bail!("pattern must not be empty");
    }
    text.chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| anyhow::anyhow!("invalid pattern symbol {c:?}: expected a digit"))
        })
        .collect()
}
