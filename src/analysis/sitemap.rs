//! Sitemap shape summary.
//!
//! Stream-parses a fetched sitemap.xml just far enough to say what it is: a
//! URL set with N entries, or a sitemap index pointing at child sitemaps.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Serialize;

/// Shape of a fetched sitemap document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SitemapSummary {
    /// `<url>` entries in a urlset.
    pub url_count: usize,
    /// `<sitemap>` entries in a sitemap index.
    pub child_sitemaps: usize,
    /// Whether the root is a `<sitemapindex>`.
    pub is_index: bool,
}

/// Count entries in a sitemap body. Parse errors end the scan with whatever
/// was counted so far; malformed sitemaps still get a best-effort summary.
pub fn summarize(xml: &str) -> SitemapSummary {
    let mut summary = SitemapSummary::default();
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"sitemapindex" => summary.is_index = true,
                b"url" => summary.url_count += 1,
                b"sitemap" => summary.child_sitemaps += 1,
                _ => {}
            },
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlset_counts_entries() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://example.com/</loc></url>
  <url><loc>https://example.com/about</loc></url>
  <url><loc>https://example.com/contact</loc></url>
</urlset>"#;
        let summary = summarize(xml);
        assert_eq!(summary.url_count, 3);
        assert!(!summary.is_index);
        assert_eq!(summary.child_sitemaps, 0);
    }

    #[test]
    fn test_sitemap_index_detected() {
        let xml = r#"<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sitemap><loc>https://example.com/sitemap-pages.xml</loc></sitemap>
  <sitemap><loc>https://example.com/sitemap-posts.xml</loc></sitemap>
</sitemapindex>"#;
        let summary = summarize(xml);
        assert!(summary.is_index);
        assert_eq!(summary.child_sitemaps, 2);
        assert_eq!(summary.url_count, 0);
    }

    #[test]
    fn test_truncated_document_keeps_partial_count() {
        let xml = "<urlset><url><loc>https://example.com/</loc></url><url><loc";
        let summary = summarize(xml);
        assert!(summary.url_count >= 1);
    }

    #[test]
    fn test_non_xml_body() {
        assert_eq!(summarize("not xml at all"), SitemapSummary::default());
    }
}
