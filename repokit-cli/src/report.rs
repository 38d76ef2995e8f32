//! Human and JSON summaries of a scaffold run.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use repokit_core::RepoInputs;
use repokit_license::LicenseOutcome;
use repokit_materialize::{ScaffoldReport, WriteResult};

#[derive(Serialize)]
struct ReportJson {
    org: String,
    repo: String,
    license: String,
    output: String,
    dry_run: bool,
    files: Vec<FileJson>,
    license_file: LicenseJson,
}

#[derive(Serialize)]
struct FileJson {
    path: String,
    status: &'static str,
}

#[derive(Serialize)]
struct LicenseJson {
    path: Option<String>,
    status: &'static str,
    error: Option<String>,
}

#[derive(Tabled)]
struct FileTableRow {
    #[tabled(rename = "file")]
    file: String,
    #[tabled(rename = "status")]
    status: String,
}

fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn write_status(write: &WriteResult) -> &'static str {
    match write {
        WriteResult::Written { .. } => "written",
        WriteResult::WouldWrite { .. } => "would_write",
    }
}

fn license_status(outcome: &LicenseOutcome) -> &'static str {
    match outcome {
        LicenseOutcome::Installed { .. } => "written",
        LicenseOutcome::WouldInstall { .. } => "would_write",
        LicenseOutcome::Failed(_) => "failed",
    }
}

pub fn print_json(
    inputs: &RepoInputs,
    root: &Path,
    report: &ScaffoldReport,
    dry_run: bool,
) -> Result<()> {
    let license_path = match &report.license {
        LicenseOutcome::Installed { path, .. } | LicenseOutcome::WouldInstall { path } => {
            Some(relative(root, path))
        }
        LicenseOutcome::Failed(_) => None,
    };
    let payload = ReportJson {
        org: inputs.org.to_string(),
        repo: inputs.repo.to_string(),
        license: inputs.license.to_string(),
        output: root.display().to_string(),
        dry_run,
        files: report
            .writes
            .iter()
            .map(|w| FileJson {
                path: relative(root, w.path()),
                status: write_status(w),
            })
            .collect(),
        license_file: LicenseJson {
            path: license_path,
            status: license_status(&report.license),
            error: report.license.error().map(|e| e.to_string()),
        },
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize report JSON")?
    );
    Ok(())
}

pub fn print_table(inputs: &RepoInputs, root: &Path, report: &ScaffoldReport, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let file_count = report.writes.len()
        + usize::from(!report.license_failed());

    println!(
        "{prefix}{} {}/{} → {} ({} files)",
        "✓".green().bold(),
        inputs.org,
        inputs.repo,
        root.display(),
        file_count,
    );

    let mut rows: Vec<FileTableRow> = report
        .writes
        .iter()
        .map(|w| FileTableRow {
            file: relative(root, w.path()),
            status: write_status(w).replace('_', " "),
        })
        .collect();
    rows.push(FileTableRow {
        file: "LICENSE.md".to_string(),
        status: match &report.license {
            LicenseOutcome::Failed(_) => "skipped".to_string(),
            other => license_status(other).replace('_', " "),
        },
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    if let Some(err) = report.license.error() {
        println!("{} {}", "⚠".yellow().bold(), err);
    }
}
