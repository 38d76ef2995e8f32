//! Error types for repokit-license.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while fetching or installing a license.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// The identifier cannot be used as a URL path segment.
    #[error("invalid license identifier {id:?}; see {catalog} for valid identifiers")]
    InvalidIdentifier { id: String, catalog: String },

    /// The remote host answered with something other than 200.
    #[error("license '{id}' not available (HTTP {status} from {url}); see {catalog} for valid identifiers")]
    Status {
        id: String,
        status: u16,
        url: String,
        catalog: String,
    },

    /// The request never produced a response.
    #[error("failed to fetch license '{id}' from {url}: {source}")]
    Transport {
        id: String,
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// The response body could not be read.
    #[error("failed to read license '{id}' body: {source}")]
    Body {
        id: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing `LICENSE.md` failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
