//! # repokit-materialize
//!
//! Renders every manifest entry and writes it under an output root, then
//! installs the license.
//!
//! Call [`materialize`] for the templated files alone, or
//! [`pipeline::scaffold`] for a full run.

pub mod error;
pub mod pipeline;
pub mod writer;

pub use error::MaterializeError;
pub use pipeline::{scaffold, ScaffoldReport};
pub use writer::{materialize, WriteResult};
