//! Full scaffold run: materialize the manifest, then install the license.

use std::path::Path;

use repokit_core::RepoInputs;
use repokit_license::{install_license, LicenseOutcome, LicenseSource};
use repokit_renderer::{manifest, TemplateEngine};

use crate::{materialize, MaterializeError, WriteResult};

/// Everything a scaffold run produced.
#[derive(Debug)]
pub struct ScaffoldReport {
    /// One entry per manifest file, in manifest order.
    pub writes: Vec<WriteResult>,
    /// Outcome of the license step.
    pub license: LicenseOutcome,
}

impl ScaffoldReport {
    pub fn license_failed(&self) -> bool {
        self.license.is_failed()
    }
}

/// Run the whole pipeline for `inputs` under `root`.
///
/// Materialization errors are fatal and returned. License failures are not:
/// they are logged and recorded in [`ScaffoldReport::license`].
pub fn scaffold(
    engine: &TemplateEngine,
    source: &dyn LicenseSource,
    inputs: &RepoInputs,
    root: &Path,
    dry_run: bool,
) -> Result<ScaffoldReport, MaterializeError> {
    tracing::info!(
        "scaffolding {}/{} ({} license) into {}",
        inputs.org,
        inputs.repo,
        inputs.license,
        root.display()
    );

    let writes = materialize(engine, manifest::entries(), inputs, root, dry_run)?;
    let license = install_license(source, &inputs.license, root, dry_run);

    Ok(ScaffoldReport { writes, license })
}
