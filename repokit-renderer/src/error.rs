//! Error types for repokit-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No template with this name is loaded.
    #[error("template not found: {name}")]
    TemplateNotFound { name: String },

    /// A template failed to parse while the bank was being built.
    #[error("malformed template: {0}")]
    Syntax(#[source] tera::Error),

    /// Rendering failed, e.g. a placeholder has no matching variable.
    #[error("failed to render {name}: {}", describe(.source))]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },

    /// Building the tera context from a variable set failed.
    #[error("context serialization error: {0}")]
    Context(#[source] tera::Error),

    /// Filesystem error while loading user templates.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}

/// Tera keeps the useful detail ("Variable `x` not found") in the source
/// chain; fold it into one line.
fn describe(err: &tera::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut cur = std::error::Error::source(err);
    while let Some(e) = cur {
        parts.push(e.to_string());
        cur = e.source();
    }
    parts.join(": ")
}
