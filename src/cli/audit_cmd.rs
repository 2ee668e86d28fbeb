//! `sitelens audit <url>` — fetch a page and report its on-page signals.

use crate::acquisition::http_client::HttpClient;
use crate::analysis::report::{AuditReport, Evaluation};
use crate::analysis::{self, robots, sitemap};
use crate::cli::output::{self, Styled};
use anyhow::{Context, Result};
use std::time::Instant;
use tracing::warn;
use url::Url;

/// How many list entries (images, mixed-content URLs) to show before
/// truncating in non-verbose mode.
const LIST_CAP: usize = 8;

/// Run the audit command.
pub async fn run(target: &str, timeout_ms: u64) -> Result<()> {
    let s = Styled::new();
    let start = Instant::now();

    let url = normalize_target(target)?;
    let client = HttpClient::new(timeout_ms).context("building HTTP client")?;

    if !output::is_json() && !output::is_quiet() {
        eprintln!("  Auditing {} ...", s.cyan(url.as_str()));
        eprintln!();
    }

    let report = match fetch_and_analyze(&client, &url).await {
        Ok(report) => report,
        Err(e) => {
            warn!("audit of {url} failed: {e:#}");
            if output::is_json() {
                output::print_json(&serde_json::json!({ "error": "Unable to retrieve data." }));
            } else {
                eprintln!("  Unable to retrieve data.");
            }
            return Ok(());
        }
    };

    if output::is_json() {
        output::print_json(&serde_json::to_value(&report)?);
        return Ok(());
    }

    print_report(&s, &report);

    if !output::is_quiet() {
        eprintln!("  Audit complete in {:.1}s", start.elapsed().as_secs_f64());
    }
    Ok(())
}

async fn fetch_and_analyze(client: &HttpClient, url: &Url) -> Result<AuditReport> {
    let html = client.get_page(url).await.context("fetching page")?;
    analysis::analyze(html, url, client).await
}

/// Accept bare domains by assuming https.
fn normalize_target(target: &str) -> Result<Url> {
    match Url::parse(target) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{target}"))
            .with_context(|| format!("invalid URL: {target}")),
        Err(e) => Err(e).with_context(|| format!("invalid URL: {target}")),
    }
}

/// Render the full sectioned report to stderr.
fn print_report(s: &Styled, report: &AuditReport) {
    let results = &report.results;
    let feedback = &report.feedback;

    output::print_section(s, "Page Title");
    output::print_detail(&format!("Title:   {}", or_not_found(&results.title)));
    output::print_detail(&format!("Length:  {} characters", results.title_length));
    print_eval(s, &feedback.title);
    eprintln!();

    output::print_section(s, "Meta Description");
    output::print_detail(&format!(
        "Description:  {}",
        or_not_found(&results.meta_description)
    ));
    output::print_detail(&format!(
        "Length:       {} characters",
        results.meta_description_length
    ));
    print_eval(s, &feedback.meta_description);
    eprintln!();

    output::print_section(s, "Meta Keywords");
    output::print_detail(&format!("Keywords:  {}", or_not_found(&results.meta_keywords)));
    print_eval(s, &feedback.meta_keywords);
    eprintln!();

    output::print_section(s, "Meta Robots");
    output::print_detail(&format!("Robots:  {}", or_not_found(&results.meta_robots)));
    print_eval(s, &feedback.meta_robots);
    eprintln!();

    output::print_section(s, "Canonical URL");
    output::print_detail(&format!("URL:  {}", or_not_found(&results.canonical_url)));
    print_eval(s, &feedback.canonical_url);
    eprintln!();

    output::print_section(s, "Header Tags");
    print_headings(s, report);
    print_eval(s, &feedback.headers.h1);
    eprintln!();

    output::print_section(s, "Images Missing Alt Attributes");
    print_list(s, &results.images_without_alt);
    print_eval(s, &feedback.images_without_alt);
    eprintln!();

    output::print_section(s, "Open Graph Tags");
    for (property, content) in &results.open_graph {
        output::print_detail(&format!("{property}:  {content}"));
    }
    print_eval(s, &feedback.open_graph);
    eprintln!();

    output::print_section(s, "Twitter Card Tags");
    for (name, content) in &results.twitter_card {
        output::print_detail(&format!("{name}:  {content}"));
    }
    print_eval(s, &feedback.twitter_card);
    eprintln!();

    output::print_section(s, "Structured Data");
    print_structured_data(s, report);
    print_eval(s, &feedback.structured_data);
    eprintln!();

    output::print_section(s, "Language and Locale");
    output::print_detail(&format!(
        "Language:  {}",
        if results.language.is_empty() {
            "Not specified"
        } else {
            results.language.as_str()
        }
    ));
    print_eval(s, &feedback.language);
    eprintln!();

    output::print_section(s, "Viewport Meta Tag");
    output::print_detail(&format!("Content:  {}", or_not_found(&results.meta_viewport)));
    print_eval(s, &feedback.meta_viewport);
    eprintln!();

    output::print_section(s, "Favicon");
    output::print_detail(&format!("Favicon URL:  {}", or_not_found(&results.favicon)));
    print_eval(s, &feedback.favicon);
    eprintln!();

    output::print_section(s, "Links Count");
    output::print_detail(&format!("Internal links:  {}", results.internal_links));
    output::print_detail(&format!("External links:  {}", results.external_links));
    print_eval(s, &feedback.links);
    eprintln!();

    output::print_section(s, "Content Word Count");
    output::print_detail(&format!("Word count:  {}", results.word_count));
    print_eval(s, &feedback.word_count);
    eprintln!();

    output::print_section(s, "Security and HTTPS");
    output::print_detail(&format!(
        "Served over HTTPS:  {}",
        if results.is_https { "Yes" } else { "No" }
    ));
    print_eval(s, &feedback.is_https);
    if !results.mixed_content.is_empty() {
        output::print_detail("Mixed content detected:");
        print_list(s, &results.mixed_content);
    }
    print_eval(s, &feedback.mixed_content);
    eprintln!();

    output::print_section(s, "robots.txt");
    print_eval(s, &feedback.robots_txt);
    if !results.robots_txt.is_empty() {
        let summary = robots::summarize(&results.robots_txt);
        output::print_detail(&s.dim(&format!(
            "{} user-agent group(s), {} allow / {} disallow rule(s), {} sitemap directive(s)",
            summary.user_agents.len(),
            summary.allow_rules,
            summary.disallow_rules,
            summary.sitemaps.len()
        )));
        if output::is_verbose() {
            for line in results.robots_txt.lines().take(12) {
                output::print_detail(&s.dim(line));
            }
        }
    }
    eprintln!();

    output::print_section(s, "sitemap.xml");
    print_eval(s, &feedback.sitemap_xml);
    if !results.sitemap_xml.is_empty() {
        let summary = sitemap::summarize(&results.sitemap_xml);
        let shape = if summary.is_index {
            format!("sitemap index with {} child sitemap(s)", summary.child_sitemaps)
        } else {
            format!("{} URL(s) listed", summary.url_count)
        };
        output::print_detail(&s.dim(&shape));
    }
    eprintln!();
}

fn print_eval(s: &Styled, eval: &Evaluation) {
    eprintln!(
        "    {} {}",
        s.status_sym(eval.status),
        s.status_color(eval.status, &eval.message)
    );
}

fn or_not_found(value: &str) -> &str {
    if value.is_empty() {
        "Not found"
    } else {
        value
    }
}

/// Per-level heading counts, with full text listings in verbose mode.
fn print_headings(s: &Styled, report: &AuditReport) {
    let outline = &report.results.headers;
    let levels = [
        ("h1", &outline.h1),
        ("h2", &outline.h2),
        ("h3", &outline.h3),
        ("h4", &outline.h4),
        ("h5", &outline.h5),
        ("h6", &outline.h6),
    ];

    let counts: Vec<String> = levels
        .iter()
        .filter(|(_, texts)| !texts.is_empty())
        .map(|(tag, texts)| format!("{tag}: {}", texts.len()))
        .collect();
    if counts.is_empty() {
        output::print_detail("No heading tags found");
    } else {
        output::print_detail(&counts.join(", "));
    }

    if output::is_verbose() {
        for (tag, texts) in levels {
            for text in texts {
                output::print_detail(&s.dim(&format!("<{tag}> {text}")));
            }
        }
    }
}

/// Block count plus a malformed-JSON detail; raw blocks stay out of the
/// terminal report (use --json for them).
fn print_structured_data(s: &Styled, report: &AuditReport) {
    let blocks = &report.results.structured_data;
    if blocks.is_empty() {
        return;
    }
    let invalid = blocks
        .iter()
        .filter(|block| serde_json::from_str::<serde_json::Value>(block).is_err())
        .count();
    let mut line = format!("{} JSON-LD block(s)", blocks.len());
    if invalid > 0 {
        line.push_str(&format!(", {invalid} not valid JSON"));
    }
    output::print_detail(&s.dim(&line));
}

fn print_list(s: &Styled, items: &[String]) {
    let cap = if output::is_verbose() {
        items.len()
    } else {
        LIST_CAP
    };
    for item in items.iter().take(cap) {
        output::print_detail(&format!("- {item}"));
    }
    if items.len() > cap {
        output::print_detail(&s.dim(&format!("... and {} more", items.len() - cap)));
    }
}
