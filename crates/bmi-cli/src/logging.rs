//! Logging initialization using `tracing` and `tracing-subscriber`.
//!
//! Verbosity flags take precedence when present; otherwise the filter
//! honors `RUST_LOG` with a `warn` default. Logs go to stderr so
//! query results on stdout stay machine-readable.

use anyhow::Context;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub fn init_logging(verbosity: &Verbosity<WarnLevel>) -> anyhow::Result<()> {
    let filter = if verbosity.is_present() {
        EnvFilter::builder()
            .with_default_directive(verbosity.tracing_level_filter().into())
            .parse_lossy("")
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!(error))
        .context("failed to initialize logging")
}
