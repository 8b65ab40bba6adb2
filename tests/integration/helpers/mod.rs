// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use jobmatch::domain::models::job_posting::JobPosting;
use jobmatch::domain::sources::{JobSource, SourceError, SourceKind, SourceResult};
use jobmatch::infrastructure::aggregator::AggregatorConfig;
use std::sync::Arc;
use std::time::Duration;

/// 数据源桩的行为
#[derive(Clone)]
pub enum Behavior {
    /// 等待指定时间后返回职位
    Jobs(Vec<JobPosting>, Duration),
    /// 立即返回错误
    Fails(SourceError),
    /// 永远不返回
    Hangs,
    /// 在任务中 panic
    Panics,
}

pub struct StubSource {
    kind: SourceKind,
    behavior: Behavior,
}

impl StubSource {
    pub fn arc(kind: SourceKind, behavior: Behavior) -> Arc<dyn JobSource> {
        Arc::new(Self { kind, behavior })
    }
}

#[async_trait]
impl JobSource for StubSource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    async fn fetch_jobs(&self, _job_title: &str, _location: &str) -> SourceResult {
        match &self.behavior {
            Behavior::Jobs(jobs, delay) => {
                tokio::time::sleep(*delay).await;
                SourceResult::success(self.kind, jobs.clone(), delay.as_millis() as u64)
            }
            Behavior::Fails(error) => SourceResult::failure(self.kind, error.clone(), 0),
            Behavior::Hangs => {
                std::future::pending::<()>().await;
                SourceResult::success(self.kind, Vec::new(), 0)
            }
            Behavior::Panics => panic!("selector table corrupted"),
        }
    }
}

pub fn posting(source: SourceKind, title: &str, company: &str, url: &str) -> JobPosting {
    JobPosting::new(source, title, company, "Remote", url)
}

pub fn config(overall_ms: u64, source_ms: u64) -> AggregatorConfig {
    AggregatorConfig {
        overall_timeout: Duration::from_millis(overall_ms),
        source_timeout: Duration::from_millis(source_ms),
        ..AggregatorConfig::default()
    }
}
