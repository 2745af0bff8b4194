//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "bmi",
    version,
    about = "Classify a BMI dataset and query category frequencies",
    long_about = "Clean a JSON dataset of gender, height, and weight, classify every\n\
                  individual into a BMI category with its health risk, and answer\n\
                  aggregate frequency queries over the categories."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the aggregate frequency of the requested categories.
    Frequency(FrequencyArgs),

    /// Print a per-category count table for the dataset.
    Summary(SummaryArgs),
}

#[derive(Parser)]
pub struct FrequencyArgs {
    /// Path to the JSON dataset.
    #[arg(value_name = "DATA_FILE")]
    pub data: PathBuf,

    /// Category labels to count (default: the overweight-and-above bands).
    #[arg(value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Print the leading classified rows before the count.
    #[arg(long = "head")]
    pub head: bool,
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// Path to the JSON dataset.
    #[arg(value_name = "DATA_FILE")]
    pub data: PathBuf,

    /// Also print the leading classified rows.
    #[arg(long = "head")]
    pub head: bool,
}
