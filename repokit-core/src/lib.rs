//! repokit core library: input types, configuration, errors.
//!
//! - [`types`]: newtypes for the three scaffold inputs and the variables
//!   derived from them
//! - [`config`]: optional YAML configuration with built-in defaults
//! - [`error`]: [`ConfigError`]

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::ConfigError;
pub use types::{LicenseId, OrgName, RepoInputs, RepoName, Variable};
