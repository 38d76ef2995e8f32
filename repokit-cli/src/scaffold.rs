//! `repokit <ORG> <REPO> [LICENSE]`: render and write the scaffold.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::Args;

use repokit_core::{Config, LicenseId, RepoInputs};
use repokit_license::HttpLicenseSource;
use repokit_materialize::pipeline;
use repokit_renderer::TemplateEngine;

use crate::report;

/// Arguments for a scaffold run.
#[derive(Args, Debug)]
pub struct ScaffoldArgs {
    /// GitHub organization (or user) that owns the repository.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub org: String,

    /// Name of the new repository.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub repo: String,

    /// SPDX license identifier (e.g. MIT, Apache-2.0). Defaults to MIT, or
    /// `default_license` from the config file.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub license: Option<String>,

    /// Directory to write the files into. Created if missing.
    #[arg(long, short = 'o', value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Directory of `.tera` files overriding the built-in templates.
    ///
    /// An override sees only the variables its file is rendered with (see the
    /// table in `repokit_renderer::manifest`); e.g. `changelog.md.tera` gets
    /// `repo` alone, and `{{ org }}` there is a render error.
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Config file to use instead of `<config dir>/repokit/config.yaml`.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show what would be written without writing or fetching anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Emit a machine-readable JSON report on stdout.
    #[arg(long)]
    pub json: bool,
}

impl ScaffoldArgs {
    pub fn run(self) -> Result<()> {
        let config = Config::resolve(self.config.as_deref())
            .context("failed to load configuration")?;

        let license = self
            .license
            .map(LicenseId::from)
            .unwrap_or_else(|| config.default_license.clone());
        let inputs = RepoInputs::new(self.org, self.repo, license);

        let engine = TemplateEngine::new(self.templates.as_deref())
            .context("failed to load templates")?;
        let source = HttpLicenseSource::from_config(&config);

        let report = pipeline::scaffold(&engine, &source, &inputs, &self.output, self.dry_run)
            .with_context(|| format!("failed to scaffold into '{}'", self.output.display()))?;

        if self.json {
            report::print_json(&inputs, &self.output, &report, self.dry_run)?;
        } else {
            report::print_table(&inputs, &self.output, &report, self.dry_run);
        }
        Ok(())
    }
}
