//! Shallow robots.txt directive summary.
//!
//! The audit only reports what a robots.txt declares — how many groups and
//! rules it carries and which sitemaps it points at. Nothing here gates
//! fetching.

use serde::Serialize;

/// Directive counts and sitemap references pulled from a robots.txt body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RobotsSummary {
    /// Distinct `User-agent` values, in order of first appearance.
    pub user_agents: Vec<String>,
    pub allow_rules: usize,
    pub disallow_rules: usize,
    pub crawl_delay: Option<f32>,
    /// `Sitemap:` directive values, in order.
    pub sitemaps: Vec<String>,
}

/// Summarize a robots.txt body. Unknown directives and malformed lines are
/// skipped; an empty body yields an empty summary.
pub fn summarize(txt: &str) -> RobotsSummary {
    let mut summary = RobotsSummary::default();

    for line in txt.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Inline comments end the directive value
        let line = line.split('#').next().unwrap_or("").trim();

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        let value = value.trim();

        match key.as_str() {
            "user-agent" => {
                if !value.is_empty() && !summary.user_agents.iter().any(|ua| ua == value) {
                    summary.user_agents.push(value.to_string());
                }
            }
            // An empty Disallow/Allow value is a no-op rule
            "allow" if !value.is_empty() => summary.allow_rules += 1,
            "disallow" if !value.is_empty() => summary.disallow_rules += 1,
            "crawl-delay" => {
                if let Ok(delay) = value.parse::<f32>() {
                    summary.crawl_delay = Some(delay);
                }
            }
            "sitemap" if !value.is_empty() => summary.sitemaps.push(value.to_string()),
            _ => {}
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_counts_directives() {
        let txt = r#"
# store robots
User-agent: *
Allow: /
Disallow: /admin
Disallow: /cart # checkout flow
Crawl-delay: 2.5

User-agent: badbot
Disallow: /

Sitemap: https://example.com/sitemap.xml
Sitemap: https://example.com/sitemap-news.xml
"#;
        let summary = summarize(txt);
        assert_eq!(summary.user_agents, vec!["*", "badbot"]);
        assert_eq!(summary.allow_rules, 1);
        assert_eq!(summary.disallow_rules, 3);
        assert_eq!(summary.crawl_delay, Some(2.5));
        assert_eq!(summary.sitemaps.len(), 2);
    }

    #[test]
    fn test_empty_disallow_is_not_a_rule() {
        let summary = summarize("User-agent: *\nDisallow:\n");
        assert_eq!(summary.disallow_rules, 0);
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(summarize(""), RobotsSummary::default());
    }

    #[test]
    fn test_repeated_user_agent_deduplicated() {
        let summary = summarize("User-agent: *\nDisallow: /a\nUser-agent: *\nDisallow: /b\n");
        assert_eq!(summary.user_agents, vec!["*"]);
        assert_eq!(summary.disallow_rules, 2);
    }
}
