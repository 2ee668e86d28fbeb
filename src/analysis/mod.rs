//! On-page signal analysis.
//!
//! One audit reads a single page: every document-derived signal is computed
//! synchronously from one parsed snapshot, then robots.txt and sitemap.xml
//! are fetched from the page origin and folded into the same report. The
//! auxiliary fetches degrade to absent resources; they never fail an audit.

pub mod checks;
pub mod page;
pub mod report;
pub mod robots;
pub mod sitemap;

use crate::acquisition::http_client::HttpClient;
use crate::analysis::page::PageSnapshot;
use crate::analysis::report::AuditReport;
use anyhow::{Context, Result};
use url::Url;

/// Audit already-fetched page markup.
///
/// The snapshot parse runs on the blocking pool (the HTML parser is not
/// `Send`); the two auxiliary fetches are issued concurrently and both
/// complete before the report resolves.
pub async fn analyze(html: String, url: &Url, client: &HttpClient) -> Result<AuditReport> {
    let origin = url.origin().ascii_serialization();
    let page_url = url.clone();

    let (mut results, mut feedback) = tokio::task::spawn_blocking(move || {
        let page = PageSnapshot::parse(&html, &page_url);
        checks::collect(&page)
    })
    .await
    .context("signal collection task failed")?;

    let robots_url = format!("{origin}/robots.txt");
    let sitemap_url = format!("{origin}/sitemap.xml");
    let (robots_txt, sitemap_xml) = tokio::join!(
        client.fetch_text_or_empty(&robots_url),
        client.fetch_text_or_empty(&sitemap_url),
    );

    results.robots_txt = robots_txt;
    results.sitemap_xml = sitemap_xml;
    feedback.robots_txt = checks::evaluate_robots_txt(&results.robots_txt);
    feedback.sitemap_xml = checks::evaluate_sitemap_xml(&results.sitemap_xml);

    Ok(AuditReport { results, feedback })
}
