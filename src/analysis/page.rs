//! Read-only snapshot of a fetched page.
//!
//! Wraps the parsed document and the page URL so every checker queries the
//! same markup without touching the network. The snapshot never mutates.

use scraper::{ElementRef, Html, Node};
use url::Url;

/// A parsed page plus the URL it was fetched from.
pub struct PageSnapshot {
    doc: Html,
    url: Url,
    origin: String,
}

impl PageSnapshot {
    /// Parse raw HTML into a snapshot anchored at `url`.
    pub fn parse(html: &str, url: &Url) -> Self {
        Self {
            doc: Html::parse_document(html),
            url: url.clone(),
            origin: url.origin().ascii_serialization(),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Scheme+host+port of the page, e.g. `https://example.com`.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// First element matching `selector`, if any. Invalid selectors match
    /// nothing.
    pub(crate) fn select_first(&self, selector: &str) -> Option<ElementRef<'_>> {
        let sel = scraper::Selector::parse(selector).ok()?;
        self.doc.select(&sel).next()
    }

    /// All elements matching `selector`, in document order.
    pub(crate) fn select_all(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match scraper::Selector::parse(selector) {
            Ok(sel) => self.doc.select(&sel).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// `content` attribute of the first `<meta name="...">` tag, or empty.
    pub(crate) fn meta_content(&self, name: &str) -> String {
        self.select_first(&format!(r#"meta[name="{name}"]"#))
            .and_then(|el| el.value().attr("content"))
            .unwrap_or_default()
            .to_string()
    }

    /// `lang` attribute of the root element, or empty.
    pub(crate) fn root_lang(&self) -> String {
        self.doc
            .root_element()
            .value()
            .attr("lang")
            .unwrap_or_default()
            .to_string()
    }

    /// Body text as a reader would see it: script, style, noscript, and
    /// template subtrees are skipped.
    pub(crate) fn visible_body_text(&self) -> String {
        let Some(body) = self.select_first("body") else {
            return String::new();
        };

        let mut out = String::new();
        let mut stack = vec![*body];
        while let Some(node) = stack.pop() {
            let children: Vec<_> = node.children().collect();
            for child in children.into_iter().rev() {
                match child.value() {
                    Node::Text(text) => {
                        out.push_str(text);
                        out.push(' ');
                    }
                    Node::Element(el) => {
                        if !matches!(el.name(), "script" | "style" | "noscript" | "template") {
                            stack.push(child);
                        }
                    }
                    _ => {}
                }
            }
        }
        out
    }
}
