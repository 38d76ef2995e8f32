//! Input types for a scaffold run.
//!
//! The three user inputs are wrapped in newtypes so an organization can never
//! be passed where a repository name is expected.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// GitHub organization (or user) that owns the new repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrgName(pub String);

impl fmt::Display for OrgName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for OrgName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrgName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Name of the repository being scaffolded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoName(pub String);

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RepoName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RepoName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// SPDX-style license identifier, e.g. `MIT` or `Apache-2.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LicenseId(pub String);

impl LicenseId {
    /// Whether the identifier is safe to use as a single URL path segment.
    ///
    /// Accepts ASCII alphanumerics plus `.`, `-` and `+` (the SPDX id
    /// alphabet). Empty ids and ids starting with `.` are rejected.
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty()
            && !self.0.starts_with('.')
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LicenseId {
    fn default() -> Self {
        Self::from("MIT")
    }
}

impl fmt::Display for LicenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for LicenseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for LicenseId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Variables
// ---------------------------------------------------------------------------

/// A placeholder that templates may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variable {
    Org,
    Repo,
    License,
}

impl Variable {
    /// Placeholder name as written inside templates.
    pub fn key(&self) -> &'static str {
        match self {
            Variable::Org => "org",
            Variable::Repo => "repo",
            Variable::License => "license",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// The three top-level inputs of a scaffold run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoInputs {
    pub org: OrgName,
    pub repo: RepoName,
    pub license: LicenseId,
}

impl RepoInputs {
    pub fn new(
        org: impl Into<OrgName>,
        repo: impl Into<RepoName>,
        license: impl Into<LicenseId>,
    ) -> Self {
        Self {
            org: org.into(),
            repo: repo.into(),
            license: license.into(),
        }
    }

    /// Value of a single variable.
    pub fn value(&self, var: Variable) -> &str {
        match var {
            Variable::Org => &self.org.0,
            Variable::Repo => &self.repo.0,
            Variable::License => &self.license.0,
        }
    }

    /// Placeholder → value map restricted to `vars`.
    pub fn variables(&self, vars: &[Variable]) -> BTreeMap<String, String> {
        vars.iter()
            .map(|v| (v.key().to_string(), self.value(*v).to_string()))
            .collect()
    }
}
