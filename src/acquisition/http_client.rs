//! Thin HTTP layer over reqwest.
//!
//! Two fetch contracts live here. The audited document goes through
//! [`HttpClient::get_page`], where any failure is a real error. Auxiliary
//! text resources go through [`HttpClient::fetch_text_or_empty`], where
//! every failure collapses to an empty string — callers cannot distinguish
//! a missing resource from an unreachable one, and are not meant to.

use crate::error::FetchError;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("sitelens/", env!("CARGO_PKG_VERSION"));

/// HTTP client with a fixed user agent and per-request timeout.
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    /// Build a client whose requests time out after `timeout_ms`.
    pub fn new(timeout_ms: u64) -> Result<Self, FetchError> {
        let inner = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self { inner })
    }

    /// GET the audited document. Non-success statuses and transport
    /// failures are errors.
    pub async fn get_page(&self, url: &Url) -> Result<String, FetchError> {
        let resp = self.inner.get(url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp.text().await?)
    }

    /// GET an auxiliary text resource. Returns the body on HTTP success and
    /// an empty string on any non-success status or transport failure.
    pub async fn fetch_text_or_empty(&self, url: &str) -> String {
        match self.inner.get(url).send().await {
            Ok(resp) if resp.status().is_success() => resp.text().await.unwrap_or_default(),
            Ok(resp) => {
                debug!("{url} returned HTTP {}, treating as absent", resp.status());
                String::new()
            }
            Err(e) => {
                debug!("fetch of {url} failed ({e}), treating as absent");
                String::new()
            }
        }
    }
}
