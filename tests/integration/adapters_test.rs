// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use jobmatch::config::settings::{Settings, SourceSettings};
use jobmatch::domain::sources::{JobSource, SourceError, SourceKind};
use jobmatch::infrastructure::sources::build_source;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 指向模拟服务器的配置，关闭重试以便测试失败路径
fn settings_for(kind: &str, server: &MockServer, max_pages: u32, max_retries: u32) -> Settings {
    let mut settings = Settings::default();
    settings.http.max_retries = max_retries;
    settings.http.initial_backoff_ms = 10;
    settings.http.request_timeout_ms = 2_000;
    settings.sources.insert(
        kind.to_string(),
        SourceSettings {
            base_url: Some(server.uri()),
            max_pages: Some(max_pages),
            ..SourceSettings::default()
        },
    );
    settings
}

fn adapter(kind: SourceKind, settings: &Settings) -> Arc<dyn JobSource> {
    build_source(kind, settings).unwrap()
}

fn indeed_card(id: &str, title: &str, company: &str) -> String {
    format!(
        r#"<div class="job_seen_beacon" data-jk="{id}">
             <h2 class="jobTitle"><a href="/viewjob?jk={id}"><span title="{title}">{title}</span></a></h2>
             <span data-testid="company-name">{company}</span>
             <div data-testid="text-location">Austin, TX</div>
             <div class="job-snippet"><ul><li>Rust, Tokio and PostgreSQL.</li></ul></div>
           </div>"#
    )
}

fn page(cards: &[String]) -> String {
    format!("<html><head><title>Jobs</title></head><body>{}</body></html>", cards.concat())
}

#[tokio::test]
async fn test_html_board_paginates_until_empty_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .and(query_param("start", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page(&[])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .and(query_param("q", "Rust Developer"))
        .and(query_param("l", "Austin, TX"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page(&[
            indeed_card("a1", "Rust Developer", "Ferrous Labs"),
            indeed_card("a2", "Senior Rust Developer", "Oxide"),
        ])))
        .mount(&server)
        .await;

    let settings = settings_for("indeed", &server, 3, 0);
    let result = adapter(SourceKind::Indeed, &settings)
        .fetch_jobs("Rust Developer", "Austin, TX")
        .await;

    assert!(result.is_success());
    assert_eq!(result.jobs.len(), 2);
    assert_eq!(result.jobs[0].external_id, "a1");
    assert_eq!(result.jobs[0].url, format!("{}/viewjob?jk=a1", server.uri()));
    assert!(result.jobs[1].skills_mentioned.contains("postgresql"));
}

#[tokio::test]
async fn test_html_board_keeps_partial_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .and(query_param("start", "10"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(page(&[indeed_card("b1", "Rust Developer", "Acme")])),
        )
        .mount(&server)
        .await;

    let settings = settings_for("indeed", &server, 2, 0);
    let result = adapter(SourceKind::Indeed, &settings)
        .fetch_jobs("Rust Developer", "")
        .await;

    assert!(!result.is_success());
    assert!(!result.is_failure());
    assert_eq!(result.jobs.len(), 1);
    assert!(matches!(result.error, Some(SourceError::Network(_))));
}

#[tokio::test]
async fn test_server_error_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(page(&[indeed_card("c1", "Rust Developer", "Acme")])),
        )
        .mount(&server)
        .await;

    let settings = settings_for("indeed", &server, 1, 1);
    let result = adapter(SourceKind::Indeed, &settings)
        .fetch_jobs("Rust Developer", "")
        .await;

    assert!(result.is_success());
    assert_eq!(result.jobs.len(), 1);
}

#[tokio::test]
async fn test_rate_limit_responses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let settings = settings_for("indeed", &server, 1, 2);
    let result = adapter(SourceKind::Indeed, &settings)
        .fetch_jobs("Rust Developer", "")
        .await;

    assert!(result.is_failure());
    assert_eq!(result.error, Some(SourceError::RateLimited));
    // 限流不重试
    assert_eq!(server.received_requests().await.map(|r| r.len()), Some(1));
}

#[tokio::test]
async fn test_captcha_page_is_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><head><title>Just a moment...</title></head><body>Checking your browser</body></html>",
        ))
        .mount(&server)
        .await;

    let settings = settings_for("indeed", &server, 1, 0);
    let result = adapter(SourceKind::Indeed, &settings)
        .fetch_jobs("Rust Developer", "")
        .await;

    assert_eq!(result.error, Some(SourceError::RateLimited));
}

#[tokio::test]
async fn test_changed_markup_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<div class="job_seen_beacon"><p>redesigned</p></div>
               <div class="job_seen_beacon"><p>redesigned</p></div>"#,
        ))
        .mount(&server)
        .await;

    let settings = settings_for("indeed", &server, 1, 0);
    let result = adapter(SourceKind::Indeed, &settings)
        .fetch_jobs("Rust Developer", "")
        .await;

    assert!(matches!(result.error, Some(SourceError::Parse(_))));
    assert!(result.jobs.is_empty());
}

#[tokio::test]
async fn test_per_source_rate_limiter_denies_without_waiting() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(page(&[indeed_card("d1", "Rust Developer", "Acme")])),
        )
        .mount(&server)
        .await;

    let mut settings = settings_for("indeed", &server, 1, 0);
    if let Some(source) = settings.sources.get_mut("indeed") {
        source.requests_per_minute = Some(1);
    }
    let indeed = adapter(SourceKind::Indeed, &settings);

    let first = indeed.fetch_jobs("Rust Developer", "").await;
    let second = indeed.fetch_jobs("Rust Developer", "").await;

    assert!(first.is_success());
    assert_eq!(second.error, Some(SourceError::RateLimited));
}

#[tokio::test]
async fn test_json_api_adapter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/remote-jobs"))
        .and(query_param("search", "Rust Developer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job-count": 1,
            "jobs": [{
                "id": 1912,
                "title": "Rust Developer",
                "company_name": "Parity",
                "candidate_required_location": "Europe",
                "description": "<p>Substrate, Rust and Docker</p>",
                "url": "https://remotive.com/remote-jobs/software-dev/rust-developer-1912",
                "publication_date": "2024-01-15T10:30:00",
                "salary": "€70k - €90k",
                "tags": ["rust", "blockchain"]
            }]
        })))
        .mount(&server)
        .await;

    let settings = settings_for("remotive", &server, 1, 0);
    let result = adapter(SourceKind::Remotive, &settings)
        .fetch_jobs("Rust Developer", "Berlin")
        .await;

    assert!(result.is_success());
    assert_eq!(result.jobs.len(), 1);
    let job = &result.jobs[0];
    assert_eq!(job.company, "Parity");
    assert_eq!(job.location, "Europe");
    assert!(job.skills_mentioned.contains("docker"));
}

#[tokio::test]
async fn test_json_api_invalid_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/remote-jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let settings = settings_for("remotive", &server, 1, 0);
    let result = adapter(SourceKind::Remotive, &settings)
        .fetch_jobs("Rust Developer", "")
        .await;

    assert!(matches!(result.error, Some(SourceError::Parse(_))));
}
