//! The scaffold manifest: which template lands where, with which variables.
//!
//! # Path mapping
//!
//! Output paths are relative to the output root. Each is rendered from the
//! entry's template, e.g. `readme.md.tera` for `README.md` and
//! `github/issue_template/bug.yml.tera` for the bug form.
//!
//! | Output path | Variables |
//! |---|---|
//! | `README.md` | org, repo, license |
//! | `CHANGELOG.md` | repo |
//! | `SUPPORT.md` | org, repo |
//! | `SECURITY.md` | org, repo |
//! | `CODE_OF_CONDUCT.md` | org |
//! | `CONTRIBUTING.md` | org, repo, license |
//! | `CODEOWNERS.md` | org |
//! | `.github/ISSUE_TEMPLATE/bug.yml` | org, repo |
//! | `.github/ISSUE_TEMPLATE/feature_request.yml` | repo |
//! | `.github/ISSUE_TEMPLATE/config.yml` | org, repo |
//! | `.github/pull_request_template.md` | repo |
//!
//! The variables column is exact: user overrides of a template get the same
//! subset, and referencing anything else fails to render.
//!
//! `LICENSE.md` is not templated; it is fetched (see `repokit-license`).

use std::path::{Path, PathBuf};

use repokit_core::types::{RepoInputs, Variable};

use crate::context::VariableSet;

/// One fixed (template, variables, destination) association.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    pub template: &'static str,
    pub variables: &'static [Variable],
    /// Destination relative to the output root, `/`-separated.
    pub destination: &'static str,
}

const ORG: &[Variable] = &[Variable::Org];
const REPO: &[Variable] = &[Variable::Repo];
const ORG_REPO: &[Variable] = &[Variable::Org, Variable::Repo];
const ALL: &[Variable] = &[Variable::Org, Variable::Repo, Variable::License];

const ENTRIES: &[ManifestEntry] = &[
    ManifestEntry {
        template: "readme.md.tera",
        variables: ALL,
        destination: "README.md",
    },
    ManifestEntry {
        template: "changelog.md.tera",
        variables: REPO,
        destination: "CHANGELOG.md",
    },
    ManifestEntry {
        template: "support.md.tera",
        variables: ORG_REPO,
        destination: "SUPPORT.md",
    },
    ManifestEntry {
        template: "security.md.tera",
        variables: ORG_REPO,
        destination: "SECURITY.md",
    },
    ManifestEntry {
        template: "code_of_conduct.md.tera",
        variables: ORG,
        destination: "CODE_OF_CONDUCT.md",
    },
    ManifestEntry {
        template: "contributing.md.tera",
        variables: ALL,
        destination: "CONTRIBUTING.md",
    },
    ManifestEntry {
        template: "codeowners.md.tera",
        variables: ORG,
        destination: "CODEOWNERS.md",
    },
    ManifestEntry {
        template: "github/issue_template/bug.yml.tera",
        variables: ORG_REPO,
        destination: ".github/ISSUE_TEMPLATE/bug.yml",
    },
    ManifestEntry {
        template: "github/issue_template/feature_request.yml.tera",
        variables: REPO,
        destination: ".github/ISSUE_TEMPLATE/feature_request.yml",
    },
    ManifestEntry {
        template: "github/issue_template/config.yml.tera",
        variables: ORG_REPO,
        destination: ".github/ISSUE_TEMPLATE/config.yml",
    },
    ManifestEntry {
        template: "github/pull_request_template.md.tera",
        variables: REPO,
        destination: ".github/pull_request_template.md",
    },
];

/// Every manifest entry in the order they are materialized.
pub fn entries() -> &'static [ManifestEntry] {
    ENTRIES
}

impl ManifestEntry {
    /// Absolute output path under `root`.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        self.destination
            .split('/')
            .fold(root.to_path_buf(), |path, part| path.join(part))
    }

    /// The variable set this entry renders with.
    pub fn variable_set(&self, inputs: &RepoInputs) -> VariableSet {
        VariableSet::from_inputs(inputs, self.variables)
    }
}
