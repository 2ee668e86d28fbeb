//! `sitelens open <url>` — hand a page to the hosted deep-analysis service.
//!
//! Pure delegation: build the service URL with the page URL percent-encoded
//! as a query parameter and launch the platform browser at it.

use crate::cli::output::{self, Styled};
use anyhow::{bail, Context, Result};

/// Hosted analysis service endpoint.
const ANALYSIS_SERVICE: &str = "https://seolytics.ai/analyze";

/// Build the service URL for a page.
pub fn service_url(page_url: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(page_url.as_bytes()).collect();
    format!("{ANALYSIS_SERVICE}?url={encoded}")
}

/// Run the open command.
pub fn run(page_url: &str) -> Result<()> {
    let s = Styled::new();
    let target = service_url(page_url);

    if !output::is_quiet() {
        eprintln!("  Opening {}", s.cyan(&target));
    }

    launch_browser(&target)
}

#[cfg(target_os = "macos")]
const BROWSER_LAUNCHER: Option<&str> = Some("open");

#[cfg(all(unix, not(target_os = "macos")))]
const BROWSER_LAUNCHER: Option<&str> = Some("xdg-open");

#[cfg(not(unix))]
const BROWSER_LAUNCHER: Option<&str> = None;

fn launch_browser(target: &str) -> Result<()> {
    let Some(launcher) = BROWSER_LAUNCHER else {
        eprintln!("  Open this URL in your browser: {target}");
        return Ok(());
    };

    let status = std::process::Command::new(launcher)
        .arg(target)
        .status()
        .with_context(|| format!("failed to run {launcher}"))?;
    if !status.success() {
        bail!("{launcher} exited with {status}");
    }
    Ok(())
}
