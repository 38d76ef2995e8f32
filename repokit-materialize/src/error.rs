//! Error types for repokit-materialize.

use std::path::PathBuf;

use thiserror::Error;

use repokit_renderer::RenderError;

/// Fatal errors of a materialization run. The first one aborts the run.
#[derive(Debug, Error)]
pub enum MaterializeError {
    /// A manifest entry's template failed to render.
    #[error("render error for {destination}: {source}")]
    Render {
        destination: PathBuf,
        #[source]
        source: RenderError,
    },

    /// An I/O error while writing an output file, with the failing path.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MaterializeError {
    /// Path of the output file the failure belongs to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            MaterializeError::Render { destination, .. } => destination,
            MaterializeError::Write { path, .. } => path,
        }
    }
}

/// Convenience constructor for [`MaterializeError::Write`].
pub(crate) fn write_err(path: impl Into<PathBuf>, source: std::io::Error) -> MaterializeError {
    MaterializeError::Write {
        path: path.into(),
        source,
    }
}
