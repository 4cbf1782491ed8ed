mod cli;
mod config;
mod expect_cmd;
mod logging;
mod matrix_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Expect(args) => expect_cmd::run(args),
        Command::Matrix(args) => matrix_cmd::run(args),
    }
}
