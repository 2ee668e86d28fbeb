//! Sitelens — on-page SEO signal auditor.
//!
//! Fetches a single page, inspects its markup, and reports ~20 independent
//! signals (title and meta lengths, structured data presence, link counts,
//! HTTPS status, robots.txt/sitemap.xml presence, ...), each classified as
//! Good, Needs Improvement, Needs Attention, Info, or Note by fixed
//! threshold rules.
//!
//! The audit is one logical flow: parse a read-only snapshot of the fetched
//! document, run every check against it, fetch the two auxiliary resources
//! from the page origin, and return the `{results, feedback}` pair.

pub mod acquisition;
pub mod analysis;
pub mod cli;
pub mod error;
