//! Install fetched license text as `LICENSE.md` under the output root.

use std::path::{Path, PathBuf};

use repokit_core::LicenseId;

use crate::error::LicenseError;
use crate::fetch::LicenseSource;

/// File name of the installed license, relative to the output root.
pub const LICENSE_FILE: &str = "LICENSE.md";

/// Result of the (non-fatal) license step.
#[derive(Debug)]
pub enum LicenseOutcome {
    /// License text was fetched and written.
    Installed { path: PathBuf, bytes: usize },
    /// `--dry-run` mode: nothing fetched, nothing written.
    WouldInstall { path: PathBuf },
    /// Fetch or write failed; no file was written.
    Failed(LicenseError),
}

impl LicenseOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, LicenseOutcome::Failed(_))
    }

    pub fn error(&self) -> Option<&LicenseError> {
        match self {
            LicenseOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Fetch `id` from `source` and write it to `<root>/LICENSE.md`.
///
/// Failures are logged and returned as [`LicenseOutcome::Failed`]; this
/// function never aborts the caller. A `LICENSE.md` left over from an
/// earlier run is not touched on failure.
pub fn install_license(
    source: &dyn LicenseSource,
    id: &LicenseId,
    root: &Path,
    dry_run: bool,
) -> LicenseOutcome {
    let path = root.join(LICENSE_FILE);

    if dry_run {
        tracing::info!("[dry-run] would fetch license {} into {}", id, path.display());
        return LicenseOutcome::WouldInstall { path };
    }

    let body = match source.fetch(id) {
        Ok(body) => body,
        Err(err) => {
            tracing::error!("{}", err);
            return LicenseOutcome::Failed(err);
        }
    };

    if let Err(err) = write_license(&path, &body) {
        tracing::error!("{}", err);
        return LicenseOutcome::Failed(err);
    }

    tracing::info!("wrote: {} ({} license, {} bytes)", path.display(), id, body.len());
    LicenseOutcome::Installed {
        path,
        bytes: body.len(),
    }
}

/// Write `body` to `<path>.repokit.tmp`, then rename it over `path`.
///
/// A failed write leaves any existing `LICENSE.md` as it was.
fn write_license(path: &Path, body: &[u8]) -> Result<(), LicenseError> {
    let write_err = |source| LicenseError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let tmp = PathBuf::from(format!("{}.repokit.tmp", path.display()));
    if let Err(e) = std::fs::write(&tmp, body) {
        let _ = std::fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    Ok(())
}
