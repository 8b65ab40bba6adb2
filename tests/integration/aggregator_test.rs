// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{config, posting, Behavior, StubSource};
use jobmatch::domain::sources::{SourceError, SourceKind};
use jobmatch::infrastructure::aggregator::JobAggregator;
use std::time::Duration;

fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

#[tokio::test(start_paused = true)]
async fn test_results_follow_registration_order() {
    // 完成顺序与注册顺序相反
    let aggregator = JobAggregator::new(
        vec![
            StubSource::arc(
                SourceKind::Indeed,
                Behavior::Jobs(vec![posting(SourceKind::Indeed, "Rust Engineer", "A", "https://a.test/1")], millis(300)),
            ),
            StubSource::arc(
                SourceKind::Reed,
                Behavior::Jobs(vec![posting(SourceKind::Reed, "Go Engineer", "B", "https://b.test/1")], millis(200)),
            ),
            StubSource::arc(
                SourceKind::Dice,
                Behavior::Jobs(vec![posting(SourceKind::Dice, "Data Engineer", "C", "https://c.test/1")], millis(100)),
            ),
        ],
        config(5_000, 1_000),
    )
    .unwrap();

    for _ in 0..3 {
        let report = aggregator.scrape_with_report("engineer", "").await;
        let titles: Vec<&str> = report.jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Rust Engineer", "Go Engineer", "Data Engineer"]);

        let kinds: Vec<SourceKind> = report.sources.iter().map(|s| s.source).collect();
        assert_eq!(kinds, vec![SourceKind::Indeed, SourceKind::Reed, SourceKind::Dice]);
        assert!(!report.all_sources_failed);
    }
}

#[tokio::test(start_paused = true)]
async fn test_hanging_source_times_out_alone() {
    let aggregator = JobAggregator::new(
        vec![
            StubSource::arc(SourceKind::Glassdoor, Behavior::Hangs),
            StubSource::arc(
                SourceKind::Remotive,
                Behavior::Jobs(vec![posting(SourceKind::Remotive, "Rust Engineer", "A", "https://a.test/1")], millis(50)),
            ),
        ],
        config(10_000, 2_000),
    )
    .unwrap();

    let started = tokio::time::Instant::now();
    let report = aggregator.scrape_with_report("rust", "").await;

    assert!(started.elapsed() <= millis(2_100));
    assert_eq!(report.jobs.len(), 1);
    assert_eq!(report.sources[0].error.as_deref(), Some("Source timed out"));
    assert_eq!(report.sources[0].job_count, 0);
    assert_eq!(report.sources[1].error, None);
}

#[tokio::test(start_paused = true)]
async fn test_overall_deadline_bounds_the_call() {
    // 单源超时大于整体截止时间，整体截止时间生效
    let aggregator = JobAggregator::new(
        vec![
            StubSource::arc(SourceKind::Indeed, Behavior::Hangs),
            StubSource::arc(SourceKind::LinkedIn, Behavior::Hangs),
            StubSource::arc(
                SourceKind::Reed,
                Behavior::Jobs(vec![posting(SourceKind::Reed, "QA Engineer", "B", "https://b.test/1")], millis(10)),
            ),
        ],
        config(1_000, 60_000),
    )
    .unwrap();

    let started = tokio::time::Instant::now();
    let report = aggregator.scrape_with_report("qa", "London").await;

    assert!(started.elapsed() >= millis(1_000));
    assert!(started.elapsed() < millis(1_500));
    assert_eq!(report.jobs.len(), 1);
    assert_eq!(report.sources[0].error.as_deref(), Some("Source timed out"));
    assert_eq!(report.sources[1].error.as_deref(), Some("Source timed out"));
    assert_eq!(report.sources[2].job_count, 1);
}

#[tokio::test(start_paused = true)]
async fn test_panicking_source_is_isolated() {
    let aggregator = JobAggregator::new(
        vec![
            StubSource::arc(SourceKind::Seek, Behavior::Panics),
            StubSource::arc(
                SourceKind::Jooble,
                Behavior::Jobs(vec![posting(SourceKind::Jooble, "Platform Engineer", "A", "https://a.test/9")], millis(5)),
            ),
        ],
        config(5_000, 1_000),
    )
    .unwrap();

    let report = aggregator.scrape_with_report("platform", "").await;

    assert_eq!(report.jobs.len(), 1);
    let error = report.sources[0].error.as_deref().unwrap();
    assert!(error.starts_with("Parse error: adapter task failed"));
    assert!(error.contains("selector table corrupted"));
}

#[tokio::test(start_paused = true)]
async fn test_all_failed_is_an_advisory_not_an_error() {
    let aggregator = JobAggregator::new(
        vec![
            StubSource::arc(SourceKind::Indeed, Behavior::Fails(SourceError::RateLimited)),
            StubSource::arc(SourceKind::Naukri, Behavior::Fails(SourceError::Network("HTTP 503".to_string()))),
            StubSource::arc(SourceKind::Shine, Behavior::Hangs),
        ],
        config(3_000, 500),
    )
    .unwrap();

    let report = aggregator.scrape_with_report("rust", "Pune").await;
    assert!(report.jobs.is_empty());
    assert!(report.all_sources_failed);
    assert_eq!(report.sources.len(), 3);
    assert_eq!(report.sources[0].error.as_deref(), Some("Rate limit exceeded"));

    let jobs = aggregator.scrape_all_sources("rust", "Pune").await;
    assert!(jobs.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_cross_source_duplicates_are_merged() {
    let shared_url = "https://careers.acme.test/jobs/42";
    let aggregator = JobAggregator::new(
        vec![
            StubSource::arc(
                SourceKind::Indeed,
                Behavior::Jobs(
                    vec![
                        posting(SourceKind::Indeed, "Rust Engineer", "Acme", shared_url),
                        posting(SourceKind::Indeed, "Go Engineer", "Acme", "https://careers.acme.test/jobs/43"),
                    ],
                    millis(20),
                ),
            ),
            StubSource::arc(SourceKind::Dice, Behavior::Jobs(Vec::new(), millis(10))),
            StubSource::arc(
                SourceKind::LinkedIn,
                Behavior::Jobs(
                    vec![posting(
                        SourceKind::LinkedIn,
                        "Rust Engineer",
                        "Acme",
                        &format!("{}?utm_source=linkedin", shared_url),
                    )],
                    millis(30),
                ),
            ),
        ],
        config(5_000, 1_000),
    )
    .unwrap();

    let report = aggregator.scrape_with_report("engineer", "").await;

    assert_eq!(report.jobs.len(), 2);
    assert_eq!(report.jobs[0].source, SourceKind::Indeed);
    assert_eq!(report.jobs[0].title, "Rust Engineer");
    assert_eq!(report.jobs[1].title, "Go Engineer");

    let counts: Vec<usize> = report.sources.iter().map(|s| s.job_count).collect();
    assert_eq!(counts, vec![2, 0, 1]);
    assert!(!report.all_sources_failed);
}

#[tokio::test(start_paused = true)]
async fn test_per_source_cap() {
    let jobs = (0..10)
        .map(|i| posting(SourceKind::Monster, &format!("Engineer {}", i), "Acme", &format!("https://m.test/{}", i)))
        .collect();
    let mut cfg = config(5_000, 1_000);
    cfg.max_jobs_per_source = 4;

    let aggregator = JobAggregator::new(
        vec![StubSource::arc(SourceKind::Monster, Behavior::Jobs(jobs, millis(1)))],
        cfg,
    )
    .unwrap();

    let report = aggregator.scrape_with_report("engineer", "").await;
    assert_eq!(report.jobs.len(), 4);
    assert_eq!(report.sources[0].job_count, 4);
}
