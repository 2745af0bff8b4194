//! BMI classifier CLI.

use clap::Parser;

mod cli;
mod commands;
mod logging;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{run_frequency, run_summary};
use crate::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging(&cli.verbosity) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
    let result = match cli.command {
        Command::Frequency(args) => run_frequency(&args),
        Command::Summary(args) => run_summary(&args),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
