//! Per-signal extraction and evaluation.
//!
//! Each signal is an independent, stateless read of the snapshot followed by
//! a fixed threshold rule. [`collect`] runs all document-derived signals and
//! assembles the two co-indexed records; the auxiliary robots.txt and
//! sitemap.xml fields are filled in afterwards by the orchestrator once
//! their fetches complete.

use crate::analysis::page::PageSnapshot;
use crate::analysis::report::{
    Evaluation, HeadingFeedback, HeadingOutline, PageSignals, SignalFeedback,
};
use std::collections::BTreeMap;

/// Extract and evaluate every document-derived signal.
///
/// The returned records carry empty auxiliary resource fields; callers
/// overwrite `robots_txt`/`sitemap_xml` (values and feedback) after the
/// fetches resolve.
pub fn collect(page: &PageSnapshot) -> (PageSignals, SignalFeedback) {
    let mut results = PageSignals::default();

    // Page title
    results.title = page
        .select_first("title")
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();
    results.title_length = results.title.chars().count();

    // Meta description
    results.meta_description = page.meta_content("description");
    results.meta_description_length = results.meta_description.chars().count();

    // Meta keywords (deprecated, still reported)
    results.meta_keywords = page.meta_content("keywords");

    // Meta robots
    results.meta_robots = page.meta_content("robots");

    // Canonical URL
    results.canonical_url = page
        .select_first(r#"link[rel="canonical"]"#)
        .and_then(|el| el.value().attr("href"))
        .unwrap_or_default()
        .to_string();

    // Heading outline, h1 through h6
    results.headers = heading_outline(page);

    // Images missing alt text
    results.images_without_alt = images_without_alt(page);

    // Open Graph tags
    results.open_graph = prefixed_meta(page, "property", "og:");

    // Twitter Card tags
    results.twitter_card = prefixed_meta(page, "name", "twitter:");

    // Structured data (JSON-LD blocks)
    results.structured_data = page
        .select_all(r#"script[type="application/ld+json"]"#)
        .iter()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect();

    // Language
    results.language = page.root_lang();

    // Viewport
    results.meta_viewport = page.meta_content("viewport");

    // Favicon, with the legacy rel fallback
    results.favicon = page
        .select_first(r#"link[rel="icon"]"#)
        .or_else(|| page.select_first(r#"link[rel="shortcut icon"]"#))
        .and_then(|el| el.value().attr("href"))
        .unwrap_or_default()
        .to_string();

    // Link counts
    (results.internal_links, results.external_links) = count_links(page);

    // Word count of visible body text
    results.word_count = page.visible_body_text().split_whitespace().count();

    // HTTPS and mixed content
    results.is_https = page.url().scheme() == "https";
    results.mixed_content = mixed_content(page);

    let feedback = SignalFeedback {
        title: evaluate_title(results.title_length),
        meta_description: evaluate_meta_description(results.meta_description_length),
        meta_keywords: evaluate_meta_keywords(&results.meta_keywords),
        meta_robots: evaluate_meta_robots(&results.meta_robots),
        canonical_url: evaluate_presence(
            !results.canonical_url.is_empty(),
            "Canonical URL is set.",
            "Canonical URL is missing.",
        ),
        headers: HeadingFeedback {
            h1: evaluate_h1_count(results.headers.h1.len()),
        },
        images_without_alt: evaluate_images_without_alt(results.images_without_alt.len()),
        open_graph: evaluate_presence(
            !results.open_graph.is_empty(),
            "Open Graph tags are present.",
            "Open Graph tags are missing.",
        ),
        twitter_card: evaluate_presence(
            !results.twitter_card.is_empty(),
            "Twitter Card tags are present.",
            "Twitter Card tags are missing.",
        ),
        structured_data: evaluate_presence(
            !results.structured_data.is_empty(),
            "Structured data is present.",
            "Structured data is missing.",
        ),
        language: evaluate_presence(
            !results.language.is_empty(),
            "Language attribute is set.",
            "Language attribute is missing.",
        ),
        meta_viewport: evaluate_presence(
            !results.meta_viewport.is_empty(),
            "Viewport meta tag is set.",
            "Viewport meta tag is missing.",
        ),
        favicon: evaluate_presence(
            !results.favicon.is_empty(),
            "Favicon is present.",
            "Favicon is missing.",
        ),
        links: Evaluation::info(format!(
            "Found {} internal and {} external links.",
            results.internal_links, results.external_links
        )),
        word_count: evaluate_word_count(results.word_count),
        is_https: evaluate_presence(
            results.is_https,
            "Page is served over HTTPS.",
            "Page is not served over HTTPS.",
        ),
        mixed_content: evaluate_presence(
            results.mixed_content.is_empty(),
            "No mixed content detected.",
            "Mixed content detected.",
        ),
        robots_txt: evaluate_robots_txt(&results.robots_txt),
        sitemap_xml: evaluate_sitemap_xml(&results.sitemap_xml),
    };

    (results, feedback)
}

fn heading_outline(page: &PageSnapshot) -> HeadingOutline {
    let texts = |tag: &str| -> Vec<String> {
        page.select_all(tag)
            .iter()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect()
    };
    HeadingOutline {
        h1: texts("h1"),
        h2: texts("h2"),
        h3: texts("h3"),
        h4: texts("h4"),
        h5: texts("h5"),
        h6: texts("h6"),
    }
}

fn images_without_alt(page: &PageSnapshot) -> Vec<String> {
    page.select_all("img")
        .iter()
        .filter(|el| {
            el.value()
                .attr("alt")
                .map(|alt| alt.trim().is_empty())
                .unwrap_or(true)
        })
        .map(|el| el.value().attr("src").unwrap_or_default().to_string())
        .collect()
}

/// Collect `<meta>` tags whose `attr` value starts with `prefix` into a
/// name→content map.
fn prefixed_meta(page: &PageSnapshot, attr: &str, prefix: &str) -> BTreeMap<String, String> {
    page.select_all(&format!(r#"meta[{attr}^="{prefix}"]"#))
        .iter()
        .filter_map(|el| {
            let key = el.value().attr(attr)?;
            let content = el.value().attr("content").unwrap_or_default();
            Some((key.to_string(), content.to_string()))
        })
        .collect()
}

/// Count anchors carrying an `href`, split into internal (resolved URL
/// starts with the page origin) and external (everything else, including
/// unresolvable hrefs). The two counts always sum to the anchor total.
fn count_links(page: &PageSnapshot) -> (usize, usize) {
    let mut internal = 0;
    let mut external = 0;
    for el in page.select_all("a[href]") {
        let href = el.value().attr("href").unwrap_or_default();
        let is_internal = page
            .url()
            .join(href)
            .map(|abs| abs.as_str().starts_with(page.origin()))
            .unwrap_or(false);
        if is_internal {
            internal += 1;
        } else {
            external += 1;
        }
    }
    (internal, external)
}

/// Raw `src`/`href` values that reference plain-http resources. The scan
/// applies regardless of the page scheme; `src` wins over `href` when both
/// are present and non-empty.
fn mixed_content(page: &PageSnapshot) -> Vec<String> {
    page.select_all("[src], [href]")
        .iter()
        .filter_map(|el| {
            let value = el
                .value()
                .attr("src")
                .filter(|s| !s.is_empty())
                .or_else(|| el.value().attr("href"))?;
            value.starts_with("http:").then(|| value.to_string())
        })
        .collect()
}

pub(crate) fn evaluate_title(length: usize) -> Evaluation {
    if (1..=60).contains(&length) {
        Evaluation::good("Title length is optimal.")
    } else if length > 60 {
        Evaluation::improve("Title is too long.")
    } else {
        Evaluation::improve("Title is missing.")
    }
}

pub(crate) fn evaluate_meta_description(length: usize) -> Evaluation {
    if (50..=160).contains(&length) {
        Evaluation::good("Meta description length is optimal.")
    } else if length > 160 {
        Evaluation::improve("Meta description is too long.")
    } else {
        Evaluation::improve("Meta description is missing or too short.")
    }
}

pub(crate) fn evaluate_meta_keywords(value: &str) -> Evaluation {
    if value.is_empty() {
        Evaluation::good("No meta keywords tag found (recommended).")
    } else {
        Evaluation::note("Meta keywords are no longer used by most search engines.")
    }
}

pub(crate) fn evaluate_meta_robots(value: &str) -> Evaluation {
    if value.is_empty() || value.eq_ignore_ascii_case("index, follow") {
        Evaluation::good("Page is set to be indexed and followed.")
    } else {
        Evaluation::attention(format!("Robots meta tag: {value}"))
    }
}

pub(crate) fn evaluate_h1_count(count: usize) -> Evaluation {
    match count {
        1 => Evaluation::good("One H1 tag found."),
        0 => Evaluation::improve("No H1 tag found."),
        _ => Evaluation::improve("Multiple H1 tags found."),
    }
}

pub(crate) fn evaluate_images_without_alt(count: usize) -> Evaluation {
    if count == 0 {
        Evaluation::good("All images have alt attributes.")
    } else {
        Evaluation::improve(format!("{count} images missing alt attributes."))
    }
}

pub(crate) fn evaluate_word_count(count: usize) -> Evaluation {
    if count > 300 {
        Evaluation::good("Content has a good word count.")
    } else {
        Evaluation::improve("Content word count is low.")
    }
}

pub(crate) fn evaluate_robots_txt(body: &str) -> Evaluation {
    evaluate_presence(
        !body.is_empty(),
        "robots.txt file is present.",
        "robots.txt file is missing.",
    )
}

pub(crate) fn evaluate_sitemap_xml(body: &str) -> Evaluation {
    evaluate_presence(
        !body.is_empty(),
        "sitemap.xml file is present.",
        "sitemap.xml file is missing.",
    )
}

fn evaluate_presence(present: bool, good: &str, missing: &str) -> Evaluation {
    if present {
        Evaluation::good(good)
    } else {
        Evaluation::improve(missing)
    }
}
