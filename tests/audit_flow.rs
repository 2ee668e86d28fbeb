//! End-to-end audit flow against a mock origin.

use assert_json_diff::assert_json_include;
use serde_json::json;
use sitelens::acquisition::http_client::HttpClient;
use sitelens::analysis;
use sitelens::analysis::report::Status;
use sitelens::error::FetchError;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <title>Example Store</title>
  <meta name="description" content="A small demonstration storefront used to exercise the on-page audit checks end to end.">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <link rel="canonical" href="https://example.com/">
  <link rel="icon" href="/favicon.ico">
  <meta property="og:title" content="Example Store">
  <script type="application/ld+json">{"@type":"WebSite"}</script>
</head>
<body>
  <h1>Welcome</h1>
  <a href="/about">About</a>
  <a href="https://elsewhere.example/">Partner</a>
  <p>A short body.</p>
</body>
</html>"#;

async fn mock_origin() -> (MockServer, Url, HttpClient) {
    let server = MockServer::start().await;
    let url = Url::parse(&server.uri()).unwrap();
    let client = HttpClient::new(5_000).unwrap();
    (server, url, client)
}

#[tokio::test]
async fn full_audit_with_robots_present_and_sitemap_missing() {
    let (server, url, client) = mock_origin().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /admin\n"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let html = client.get_page(&url).await.unwrap();
    let report = analysis::analyze(html, &url, &client).await.unwrap();

    assert_eq!(report.feedback.title.status, Status::Good);
    assert_eq!(report.feedback.meta_description.status, Status::Good);
    assert_eq!(report.feedback.headers.h1.status, Status::Good);
    assert_eq!(report.feedback.open_graph.status, Status::Good);
    assert_eq!(report.feedback.structured_data.status, Status::Good);

    // Relative links resolve against the mock origin
    assert_eq!(report.results.internal_links, 1);
    assert_eq!(report.results.external_links, 1);

    // The mock origin serves plain http
    assert!(!report.results.is_https);
    assert_eq!(report.feedback.is_https.status, Status::NeedsImprovement);

    assert!(report.results.robots_txt.contains("Disallow: /admin"));
    assert_eq!(report.feedback.robots_txt.status, Status::Good);

    assert_eq!(report.results.sitemap_xml, "");
    assert_eq!(
        report.feedback.sitemap_xml.message,
        "sitemap.xml file is missing."
    );
}

#[tokio::test]
async fn origin_without_auxiliary_resources_reports_both_missing() {
    let (server, url, client) = mock_origin().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&server)
        .await;
    // robots.txt and sitemap.xml fall through to the mock server's 404

    let html = client.get_page(&url).await.unwrap();
    let report = analysis::analyze(html, &url, &client).await.unwrap();

    assert_eq!(report.results.robots_txt, "");
    assert_eq!(report.results.sitemap_xml, "");
    assert_eq!(
        report.feedback.robots_txt.message,
        "robots.txt file is missing."
    );
    assert_eq!(
        report.feedback.sitemap_xml.message,
        "sitemap.xml file is missing."
    );
    assert_eq!(report.feedback.robots_txt.status, Status::NeedsImprovement);
}

#[tokio::test]
async fn report_serializes_with_wire_keys() {
    let (server, url, client) = mock_origin().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\n"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let html = client.get_page(&url).await.unwrap();
    let report = analysis::analyze(html, &url, &client).await.unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_json_include!(
        actual: value,
        expected: json!({
            "results": {
                "title": "Example Store",
                "isHTTPS": false,
                "canonicalURL": "https://example.com/",
                "sitemapXml": "",
            },
            "feedback": {
                "robotsTxt": { "status": "Good", "message": "robots.txt file is present." },
                "sitemapXml": { "status": "Needs Improvement" },
            }
        })
    );
}

#[tokio::test]
async fn fetch_helper_treats_all_failures_as_absence() {
    let (server, url, client) = mock_origin().await;

    Mock::given(method("GET"))
        .and(path("/found"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("ignored"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let base = url.as_str().trim_end_matches('/').to_string();
    assert_eq!(client.fetch_text_or_empty(&format!("{base}/found")).await, "hello");
    assert_eq!(client.fetch_text_or_empty(&format!("{base}/missing")).await, "");
    assert_eq!(client.fetch_text_or_empty(&format!("{base}/broken")).await, "");

    // A connection failure is observationally identical to a 404
    assert_eq!(
        client
            .fetch_text_or_empty("http://127.0.0.1:1/robots.txt")
            .await,
        ""
    );
}

#[tokio::test]
async fn get_page_errors_on_non_success_status() {
    let (server, url, client) = mock_origin().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    match client.get_page(&url).await {
        Err(FetchError::Status { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn audit_command_reports_failure_without_erroring() {
    // Nothing listens on the target; the command prints the failure message
    // and still exits cleanly.
    let result = sitelens::cli::audit_cmd::run("http://127.0.0.1:1/", 2_000).await;
    assert!(result.is_ok());
}
