//! Run logger.
//!
//! The logger is an explicit [`Dispatch`] built once in `main` and entered
//! with `tracing::dispatcher::with_default` for the duration of the run.
//! Nothing installs a process-global subscriber.
//!
//! Two sinks:
//! - stderr, filtered by `RUST_LOG` or `-v` (`warn` → `info` → `debug`)
//! - an optional append-only file (`--log-file`) that records `debug` and up

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Args;
use tracing::Dispatch;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Logging flags shared by every invocation.
#[derive(Args, Debug, Default)]
pub struct LogArgs {
    /// Increase console log verbosity (-v info, -vv debug). `RUST_LOG` wins if set.
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also append a debug-level log of the run to this file.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

fn console_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Build the run's [`Dispatch`] from CLI flags.
pub fn build(args: &LogArgs) -> Result<Dispatch> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level(args.verbose)));
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    let file = match &args.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false)
                    .with_filter(LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    let subscriber = tracing_subscriber::registry().with(console).with(file);
    Ok(Dispatch::new(subscriber))
}
