//! License sources: where license text comes from.
//!
//! [`HttpLicenseSource`] issues exactly one blocking GET per call: no retry,
//! no custom headers, no auth. The URL is the configured base with
//! `<identifier>.txt` appended.

use std::io::{self, Read};

use repokit_core::{Config, LicenseId};

use crate::error::LicenseError;

/// Upper bound on a license body. Real license texts are a few dozen KiB.
const MAX_BODY_BYTES: u64 = 4 * 1024 * 1024;

/// Anything that can turn a license identifier into license text.
pub trait LicenseSource {
    /// Fetch the plain-text body for `id`.
    fn fetch(&self, id: &LicenseId) -> Result<Vec<u8>, LicenseError>;

    /// Catalog of valid identifiers, suggested to the user on failure.
    fn catalog_url(&self) -> &str;
}

/// Fetches license text from a raw-text HTTP host.
pub struct HttpLicenseSource {
    agent: ureq::Agent,
    base_url: String,
    catalog_url: String,
}

impl HttpLicenseSource {
    pub fn new(base_url: impl Into<String>, catalog_url: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            base_url: base_url.into(),
            catalog_url: catalog_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.license_base_url, &config.license_catalog_url)
    }

    /// Request URL for `id`: pure, no I/O.
    pub fn url_for(&self, id: &LicenseId) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/{id}.txt")
    }
}

impl LicenseSource for HttpLicenseSource {
    fn fetch(&self, id: &LicenseId) -> Result<Vec<u8>, LicenseError> {
        if !id.is_well_formed() {
            return Err(LicenseError::InvalidIdentifier {
                id: id.to_string(),
                catalog: self.catalog_url.clone(),
            });
        }

        let url = self.url_for(id);
        tracing::debug!("GET {}", url);

        let response = match self.agent.get(&url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                return Err(LicenseError::Status {
                    id: id.to_string(),
                    status,
                    url,
                    catalog: self.catalog_url.clone(),
                })
            }
            Err(err) => {
                return Err(LicenseError::Transport {
                    id: id.to_string(),
                    url,
                    source: Box::new(err),
                })
            }
        };

        // ureq hands back every 2xx; only 200 carries a license body.
        if response.status() != 200 {
            return Err(LicenseError::Status {
                id: id.to_string(),
                status: response.status(),
                url,
                catalog: self.catalog_url.clone(),
            });
        }

        let body = read_capped(response.into_reader(), MAX_BODY_BYTES).map_err(|source| {
            LicenseError::Body {
                id: id.to_string(),
                source,
            }
        })?;
        tracing::debug!("fetched {} bytes for license {}", body.len(), id);
        Ok(body)
    }

    fn catalog_url(&self) -> &str {
        &self.catalog_url
    }
}

/// Read all of `reader`, failing with `InvalidData` once more than `limit`
/// bytes arrive. A body cut off at the limit is never returned as complete.
fn read_capped(reader: impl Read, limit: u64) -> io::Result<Vec<u8>> {
    let mut body = Vec::new();
    reader.take(limit + 1).read_to_end(&mut body)?;
    if body.len() as u64 > limit {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("response body exceeds {limit} bytes"),
        ));
    }
    Ok(body)
}
