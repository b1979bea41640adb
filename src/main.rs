//! jsonvet CLI.
//!
//! Thin wrapper around [`jsonvet::cli`]: parse arguments, set up logging,
//! dispatch.

use clap::Parser;
use std::io;
use std::process::ExitCode;

use jsonvet::cli::{self, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    cli::run(Cli::parse())
}
