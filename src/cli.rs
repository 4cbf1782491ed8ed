use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tyche pattern waiting-time calculator.
#[derive(Parser)]
#[command(
    name = "tyche",
    version,
    about = "Expected waiting times for symbol patterns under uniform random draws"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute expected waiting times for every pattern of a given length.
    Expect(ExpectArgs),
    /// Print the transition matrices of a single pattern.
    Matrix(MatrixArgs),
}

/// Arguments for the `expect` subcommand.
#[derive(clap::Args)]
pub struct ExpectArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Alphabet size (overrides config).
    #[arg(short = 'm', long)]
    pub alphabet_size: Option<u16>,

    /// Pattern length (overrides config).
    #[arg(short = 'n', long)]
    pub pattern_length: Option<usize>,
}

/// Arguments for the `matrix` subcommand.
#[derive(clap::Args)]
pub struct MatrixArgs {
    /// Pattern as a string of decimal digits, e.g. "010".
    pub pattern: String,

    /// Alphabet size.
    #[arg(short = 'm', long, default_value_t = 2)]
    pub alphabet_size: u16,
}
