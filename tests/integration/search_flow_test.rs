// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{config, posting, Behavior, StubSource};
use jobmatch::config::settings::{Settings, SourceSettings};
use jobmatch::domain::models::resume::ResumeRecord;
use jobmatch::domain::services::job_matcher::JobMatcher;
use jobmatch::domain::services::job_search_service::{JobSearchService, SOURCES_UNAVAILABLE_NOTE};
use jobmatch::domain::sources::{SourceError, SourceKind};
use jobmatch::infrastructure::aggregator::{AggregatorConfig, JobAggregator};
use jobmatch::infrastructure::sources::build_source;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resume() -> ResumeRecord {
    ResumeRecord {
        skills: ["Rust", "Tokio", "PostgreSQL", "Docker"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        years_experience: Some(6.0),
        titles: vec!["Senior Rust Engineer".to_string()],
        ..ResumeRecord::default()
    }
}

#[tokio::test]
async fn test_search_across_html_and_json_sources() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><head><title>Jobs</title></head><body>
                 <div class="job_seen_beacon" data-jk="k1">
                   <h2 class="jobTitle"><a href="https://careers.acme.test/jobs/7?utm_source=indeed"><span title="Office Manager">Office Manager</span></a></h2>
                   <span data-testid="company-name">Acme</span>
                   <div class="job-snippet">Scheduling and Excel.</div>
                 </div>
                 <div class="job_seen_beacon" data-jk="k2">
                   <h2 class="jobTitle"><a href="https://careers.oxide.test/jobs/1"><span title="Senior Rust Engineer">Senior Rust Engineer</span></a></h2>
                   <span data-testid="company-name">Oxide</span>
                   <div class="job-snippet">Rust, Tokio, PostgreSQL and Docker.</div>
                 </div>
               </body></html>"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/remote-jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [{
                "id": 11,
                "title": "Senior Rust Engineer",
                "company_name": "Oxide",
                "description": "Rust, Tokio, PostgreSQL and Docker. Remote friendly.",
                "url": "https://careers.oxide.test/jobs/1"
            }, {
                "id": 12,
                "title": "Python Developer",
                "company_name": "Snake Co",
                "description": "Python and Django.",
                "url": "https://snake.test/jobs/12"
            }]
        })))
        .mount(&server)
        .await;

    let mut settings = Settings::default();
    settings.http.max_retries = 0;
    for key in ["indeed", "remotive"] {
        settings.sources.insert(
            key.to_string(),
            SourceSettings {
                base_url: Some(server.uri()),
                max_pages: Some(1),
                ..SourceSettings::default()
            },
        );
    }

    let sources = vec![
        build_source(SourceKind::Indeed, &settings).unwrap(),
        build_source(SourceKind::Remotive, &settings).unwrap(),
    ];
    let aggregator = Arc::new(JobAggregator::new(sources, AggregatorConfig::from_settings(&settings)).unwrap());
    let service = JobSearchService::new(aggregator, JobMatcher::from_settings(&settings.matching));

    let outcome = service.search("Rust Engineer", "Remote", Some(&resume())).await;

    assert!(outcome.success);
    assert!(outcome.note.is_none());
    // 两个来源的 Oxide 职位合并为一条，保留描述更完整的 Remotive 记录
    assert_eq!(outcome.total, 3);
    assert_eq!(outcome.jobs[0].company, "Oxide");
    assert_eq!(outcome.jobs[0].source, SourceKind::Remotive);
    assert_eq!(outcome.jobs[0].external_id, "11");

    let scores: Vec<f64> = outcome
        .jobs
        .iter()
        .map(|job| job.match_percentage.unwrap())
        .collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    assert!(scores.iter().all(|score| (0.0..=100.0).contains(score)));
    assert!(scores[0] > 80.0);

    let body = serde_json::to_value(&outcome).unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["sources"].as_array().map(|s| s.len()), Some(2));
    assert!(body.get("note").is_none());
}

#[tokio::test(start_paused = true)]
async fn test_search_when_every_source_fails() {
    let aggregator = JobAggregator::new(
        vec![
            StubSource::arc(SourceKind::Indeed, Behavior::Fails(SourceError::RateLimited)),
            StubSource::arc(SourceKind::TheMuse, Behavior::Hangs),
        ],
        config(2_000, 500),
    )
    .unwrap();
    let service = JobSearchService::new(Arc::new(aggregator), JobMatcher::default());

    let outcome = service.search("Data Scientist", "Berlin", Some(&resume())).await;

    assert!(outcome.success);
    assert_eq!(outcome.total, 0);
    assert_eq!(outcome.note.as_deref(), Some(SOURCES_UNAVAILABLE_NOTE));
    assert_eq!(outcome.sources[1].error.as_deref(), Some("Source timed out"));
}

#[tokio::test(start_paused = true)]
async fn test_equal_scores_keep_source_order() {
    let jobs = vec![
        posting(SourceKind::Reed, "Barista", "Cafe One", "https://cafe.test/1"),
        posting(SourceKind::Reed, "Florist", "Petals", "https://petals.test/2"),
        posting(SourceKind::Reed, "Tailor", "Threads", "https://threads.test/3"),
    ];
    let aggregator = JobAggregator::new(
        vec![StubSource::arc(SourceKind::Reed, Behavior::Jobs(jobs, Duration::from_millis(5)))],
        config(1_000, 500),
    )
    .unwrap();
    let service = JobSearchService::new(Arc::new(aggregator), JobMatcher::default());

    let outcome = service.search("anything", "", Some(&resume())).await;
    let titles: Vec<&str> = outcome.jobs.iter().map(|j| j.title.as_str()).collect();
    assert_eq!(titles, vec!["Barista", "Florist", "Tailor"]);
}
