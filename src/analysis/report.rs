//! Report types shared by the analyzer and the presentation layer.
//!
//! An audit produces two co-indexed records: [`PageSignals`] holds the raw
//! value extracted for each signal, [`SignalFeedback`] holds one verdict per
//! signal. Serialized field names match the wire format consumers expect
//! (camelCase, `canonicalURL`, `isHTTPS`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Verdict attached to an audited signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
    Info,
    Note,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Good => "Good",
            Status::NeedsImprovement => "Needs Improvement",
            Status::NeedsAttention => "Needs Attention",
            Status::Info => "Info",
            Status::Note => "Note",
        };
        f.write_str(s)
    }
}

/// One evaluated signal: a verdict plus a human-readable explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub status: Status,
    pub message: String,
}

impl Evaluation {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn good(message: impl Into<String>) -> Self {
        Self::new(Status::Good, message)
    }

    pub fn improve(message: impl Into<String>) -> Self {
        Self::new(Status::NeedsImprovement, message)
    }

    pub fn attention(message: impl Into<String>) -> Self {
        Self::new(Status::NeedsAttention, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Status::Info, message)
    }

    pub fn note(message: impl Into<String>) -> Self {
        Self::new(Status::Note, message)
    }
}

/// Heading text collected per level, `h1` through `h6`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadingOutline {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
    pub h4: Vec<String>,
    pub h5: Vec<String>,
    pub h6: Vec<String>,
}

/// Raw values extracted from the page, one field per audited signal.
///
/// Absence degrades to the field's empty sentinel (empty string, empty
/// list, zero) — there is no error variant at this level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSignals {
    pub title: String,
    pub title_length: usize,
    pub meta_description: String,
    pub meta_description_length: usize,
    pub meta_keywords: String,
    pub meta_robots: String,
    #[serde(rename = "canonicalURL")]
    pub canonical_url: String,
    pub headers: HeadingOutline,
    pub images_without_alt: Vec<String>,
    pub open_graph: BTreeMap<String, String>,
    pub twitter_card: BTreeMap<String, String>,
    pub structured_data: Vec<String>,
    pub language: String,
    pub meta_viewport: String,
    pub favicon: String,
    pub internal_links: usize,
    pub external_links: usize,
    pub word_count: usize,
    #[serde(rename = "isHTTPS")]
    pub is_https: bool,
    pub mixed_content: Vec<String>,
    pub robots_txt: String,
    pub sitemap_xml: String,
}

/// Heading feedback nests under `headers`; only the h1 count carries a
/// verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingFeedback {
    pub h1: Evaluation,
}

/// Per-signal verdicts, co-indexed with [`PageSignals`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalFeedback {
    pub title: Evaluation,
    pub meta_description: Evaluation,
    pub meta_keywords: Evaluation,
    pub meta_robots: Evaluation,
    #[serde(rename = "canonicalURL")]
    pub canonical_url: Evaluation,
    pub headers: HeadingFeedback,
    pub images_without_alt: Evaluation,
    pub open_graph: Evaluation,
    pub twitter_card: Evaluation,
    pub structured_data: Evaluation,
    pub language: Evaluation,
    pub meta_viewport: Evaluation,
    pub favicon: Evaluation,
    pub links: Evaluation,
    pub word_count: Evaluation,
    #[serde(rename = "isHTTPS")]
    pub is_https: Evaluation,
    pub mixed_content: Evaluation,
    pub robots_txt: Evaluation,
    pub sitemap_xml: Evaluation,
}

/// Complete audit of one page: raw signals plus one verdict per signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub results: PageSignals,
    pub feedback: SignalFeedback,
}
