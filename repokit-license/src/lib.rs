//! # repokit-license
//!
//! Fetches plain-text license bodies over HTTP and installs them as
//! `LICENSE.md`.
//!
//! A failed lookup is never fatal: [`install_license`] logs the error and
//! reports it through [`LicenseOutcome`] so the rest of the scaffold run can
//! continue.

pub mod error;
pub mod fetch;
pub mod install;

pub use error::LicenseError;
pub use fetch::{HttpLicenseSource, LicenseSource};
pub use install::{install_license, LicenseOutcome};
