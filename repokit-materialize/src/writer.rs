//! Atomic writer and manifest materialization.
//!
//! ## `atomic_write`: 4-step protocol
//!
//! 1. Render content (already done by caller).
//! 2. Ensure the parent directory exists (`create_dir_all`, idempotent).
//! 3. Write to `<path>.repokit.tmp`.
//! 4. Rename to final path (atomic on POSIX), replacing any existing file.
//!
//! ## Failure policy
//!
//! [`materialize`] is fail-fast: the first render or write error is logged
//! and returned, and later entries are not attempted. Files already written
//! by the run stay on disk.

use std::path::{Path, PathBuf};

use repokit_core::RepoInputs;
use repokit_renderer::{ManifestEntry, TemplateEngine};

use crate::error::{write_err, MaterializeError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (created or overwritten).
    Written { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path } | WriteResult::WouldWrite { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// atomic_write
// ---------------------------------------------------------------------------

/// Atomically write a single rendered file.
pub(crate) fn atomic_write(
    path: &Path,
    content: &str,
    dry_run: bool,
) -> Result<WriteResult, MaterializeError> {
    let tmp = PathBuf::from(format!("{}.repokit.tmp", path.display()));
    atomic_write_with_tmp(path, content, dry_run, &tmp)
}

fn atomic_write_with_tmp(
    path: &Path,
    content: &str,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, MaterializeError> {
    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_err(path, e))?;
    }

    if let Some(tmp_parent) = tmp.parent() {
        std::fs::create_dir_all(tmp_parent).map_err(|e| write_err(path, e))?;
    }
    std::fs::write(tmp, content).map_err(|e| write_err(path, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(write_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// materialize
// ---------------------------------------------------------------------------

/// Render and write every entry of `manifest` under `root`, in order.
///
/// Returns one [`WriteResult`] per entry, or the first error.
pub fn materialize(
    engine: &TemplateEngine,
    manifest: &[ManifestEntry],
    inputs: &RepoInputs,
    root: &Path,
    dry_run: bool,
) -> Result<Vec<WriteResult>, MaterializeError> {
    let mut writes = Vec::with_capacity(manifest.len());

    for entry in manifest {
        let path = entry.output_path(root);
        let vars = entry.variable_set(inputs);

        let content = engine
            .render(entry.template, &vars)
            .map_err(|source| MaterializeError::Render {
                destination: path.clone(),
                source,
            })
            .inspect_err(|e| tracing::error!("{}", e))?;

        let result = atomic_write(&path, &content, dry_run)
            .inspect_err(|e| tracing::error!("{}", e))?;
        writes.push(result);
    }

    Ok(writes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use repokit_core::types::Variable;
    use repokit_renderer::manifest;
    use std::fs;
    use tempfile::TempDir;

    fn acme() -> RepoInputs {
        RepoInputs::new("acme", "widget", "MIT")
    }

    #[test]
    fn first_write_returns_written() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("README.md");
        let result = atomic_write(&path, "hello", false).unwrap();
        assert!(matches!(result, WriteResult::Written { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn second_write_truncates_previous_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.md");
        atomic_write(&path, "a much longer first version\n", false).unwrap();
        atomic_write(&path, "v2\n", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2\n");
    }

    #[test]
    fn dry_run_does_not_write_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.md");
        let result = atomic_write(&path, "content", true).unwrap();
        assert!(matches!(result, WriteResult::WouldWrite { .. }));
        assert!(!path.exists(), "dry-run must not create files");
    }

    #[test]
    fn tmp_file_removed_after_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clean.md");
        atomic_write(&path, "data", false).unwrap();
        let tmp_path = PathBuf::from(format!("{}.repokit.tmp", path.display()));
        assert!(!tmp_path.exists(), ".repokit.tmp must be cleaned up");
    }

    #[test]
    fn creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp
            .path()
            .join(".github")
            .join("ISSUE_TEMPLATE")
            .join("bug.yml");
        atomic_write(&path, "content", false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn materialize_writes_every_entry_in_order() {
        let root = TempDir::new().unwrap();
        let engine = TemplateEngine::embedded().unwrap();
        let writes =
            materialize(&engine, manifest::entries(), &acme(), root.path(), false).unwrap();

        assert_eq!(writes.len(), manifest::entries().len());
        for (entry, write) in manifest::entries().iter().zip(&writes) {
            assert_eq!(write.path(), entry.output_path(root.path()));
            assert!(write.path().exists(), "{} missing", entry.destination);
        }
    }

    #[test]
    fn unknown_template_aborts_before_later_entries() {
        const VARS: &[Variable] = &[Variable::Org];
        let bad = [
            ManifestEntry { template: "codeowners.md.tera", variables: VARS, destination: "A.md" },
            ManifestEntry { template: "missing.md.tera", variables: VARS, destination: "B.md" },
            ManifestEntry { template: "codeowners.md.tera", variables: VARS, destination: "C.md" },
        ];
        let root = TempDir::new().unwrap();
        let engine = TemplateEngine::embedded().unwrap();

        let err = materialize(&engine, &bad, &acme(), root.path(), false).unwrap_err();
        assert!(matches!(err, MaterializeError::Render { .. }), "got: {err}");
        assert_eq!(err.path(), root.path().join("B.md"));
        assert!(root.path().join("A.md").exists());
        assert!(!root.path().join("C.md").exists(), "fail-fast must stop the loop");
    }

    #[test]
    #[cfg(unix)]
    fn rename_failure_leaves_original_and_cleans_tmp() {
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().unwrap();
        let readonly_dir = root.path().join("readonly");
        fs::create_dir_all(&readonly_dir).unwrap();

        let path = readonly_dir.join("file.md");
        fs::write(&path, "original").unwrap();

        let mut perms = fs::metadata(&readonly_dir).unwrap().permissions();
        perms.set_mode(0o555);
        fs::set_permissions(&readonly_dir, perms).unwrap();

        let tmp_dir = TempDir::new().unwrap();
        let tmp_path = tmp_dir.path().join("file.md.repokit.tmp");

        let result = atomic_write_with_tmp(&path, "new content", false, &tmp_path);

        let mut perms = fs::metadata(&readonly_dir).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&readonly_dir, perms).unwrap();

        // Running as root ignores directory permissions; nothing to assert then.
        if let Err(err) = result {
            assert!(matches!(err, MaterializeError::Write { .. }), "got: {err}");
            assert_eq!(err.path(), path);
            let current = fs::read_to_string(&path).unwrap();
            assert_eq!(current, "original", "original file should be intact");
            assert!(!tmp_path.exists(), ".repokit.tmp should be cleaned up");
        }
    }
}
