//! repokit: scaffold a new repository's administrative files.
//!
//! # Usage
//!
//! ```text
//! repokit <ORG> <REPO> [LICENSE] [--output <DIR>] [--templates <DIR>]
//!         [--config <FILE>] [--dry-run] [--json] [--log-file <FILE>] [-v...]
//! ```

mod logging;
mod report;
mod scaffold;

use anyhow::Result;
use clap::Parser;

use logging::LogArgs;
use scaffold::ScaffoldArgs;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "repokit",
    version,
    about = "Generate README, CHANGELOG, issue templates, CODEOWNERS and LICENSE \
             for a new repository",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    scaffold: ScaffoldArgs,

    #[command(flatten)]
    log: LogArgs,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    // Missing ORG/REPO exits here with usage text, before any file is touched.
    let cli = Cli::parse();
    let dispatch = logging::build(&cli.log)?;
    tracing::dispatcher::with_default(&dispatch, || {
        tracing::debug!("logger initialized");
        // Fatal errors go through the logger too, so `--log-file` keeps them.
        cli.scaffold
            .run()
            .inspect_err(|err| tracing::error!("{:#}", err))
    })
}
