//! # repokit-renderer
//!
//! Tera-based template bank that renders repository administrative files
//! (README, CHANGELOG, issue templates, …) from a small set of variables,
//! plus the static [`manifest`] saying where each rendered file goes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use repokit_core::RepoInputs;
//! use repokit_renderer::{manifest, TemplateEngine};
//!
//! fn render_all(inputs: &RepoInputs) {
//!     if let Ok(engine) = TemplateEngine::embedded() {
//!         for entry in manifest::entries() {
//!             if let Ok(text) = engine.render(entry.template, &entry.variable_set(inputs)) {
//!                 println!("{}: {} bytes", entry.destination, text.len());
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod manifest;

pub use context::VariableSet;
pub use engine::TemplateEngine;
pub use error::RenderError;
pub use manifest::ManifestEntry;
