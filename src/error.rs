//! Crate error types.

use thiserror::Error;

/// Failure fetching the audited document itself.
///
/// Auxiliary resources (robots.txt, sitemap.xml) never produce this —
/// their failures collapse to absence by contract.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}
