// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::models::job_posting::JobPosting;
use crate::domain::services::deduplicator::JobDeduplicator;
use crate::domain::sources::{JobSource, SourceError, SourceKind, SourceResult, SourceSummary};
use crate::infrastructure::observability::record_source_result;
use futures::FutureExt;
use metrics::counter;
use serde::Serialize;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// 聚合器构造错误
#[derive(Debug, Error, PartialEq)]
pub enum AggregatorError {
    #[error("No job sources registered")]
    NoSources,
}

/// 聚合器配置
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// 整个抓取过程的截止时间
    pub overall_timeout: Duration,
    /// 单个数据源的超时时间
    pub source_timeout: Duration,
    /// 每个数据源最多保留的职位数
    pub max_jobs_per_source: usize,
    /// 去重时剔除的 URL 跟踪参数
    pub tracking_params: Vec<String>,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl AggregatorConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            overall_timeout: Duration::from_millis(settings.aggregator.overall_timeout_ms),
            source_timeout: Duration::from_millis(settings.aggregator.source_timeout_ms),
            max_jobs_per_source: settings.aggregator.max_jobs_per_source,
            tracking_params: settings.dedup.tracking_params.clone(),
        }
    }
}

/// 一次抓取的完整报告
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeReport {
    /// 去重后的职位，按数据源注册顺序排列
    pub jobs: Vec<JobPosting>,
    /// 每个数据源的调用摘要，按注册顺序排列
    pub sources: Vec<SourceSummary>,
    /// 所有数据源均失败（仅为提示，不是错误）
    pub all_sources_failed: bool,
}

/// 职位聚合器
///
/// 每个数据源在独立的 tokio 任务中运行，受单源超时约束；
/// 所有任务共享一个整体截止时间，到期后未完成的任务被中止并记为超时。
/// 输出顺序只取决于注册顺序，与完成先后无关。
pub struct JobAggregator {
    sources: Vec<Arc<dyn JobSource>>,
    config: AggregatorConfig,
    deduplicator: JobDeduplicator,
}

impl JobAggregator {
    /// 创建聚合器，至少需要一个数据源
    pub fn new(
        sources: Vec<Arc<dyn JobSource>>,
        config: AggregatorConfig,
    ) -> Result<Self, AggregatorError> {
        if sources.is_empty() {
            return Err(AggregatorError::NoSources);
        }

        let deduplicator = JobDeduplicator::new(config.tracking_params.clone());
        Ok(Self {
            sources,
            config,
            deduplicator,
        })
    }

    /// 已注册的数据源
    pub fn source_kinds(&self) -> Vec<SourceKind> {
        self.sources.iter().map(|source| source.kind()).collect()
    }

    /// 抓取所有数据源并返回去重后的职位
    pub async fn scrape_all_sources(&self, job_title: &str, location: &str) -> Vec<JobPosting> {
        self.scrape_with_report(job_title, location).await.jobs
    }

    /// 抓取所有数据源并返回包含各源摘要的报告
    pub async fn scrape_with_report(&self, job_title: &str, location: &str) -> ScrapeReport {
        let started = Instant::now();
        let results = self.fetch_all(job_title, location, started).await;

        let mut collected = Vec::new();
        let mut sources = Vec::with_capacity(results.len());

        for mut result in results {
            result.jobs.truncate(self.config.max_jobs_per_source);
            log_source_result(&result);
            record_source_result(&result);
            sources.push(result.summary());
            collected.append(&mut result.jobs);
        }

        let all_sources_failed = sources.iter().all(|summary| {
            summary.error.is_some() && summary.job_count == 0
        });

        let fetched = collected.len();
        let jobs = self.deduplicator.dedup(collected);

        counter!("job_aggregator_runs_total").increment(1);
        if all_sources_failed {
            counter!("job_aggregator_all_sources_failed_total").increment(1);
            warn!(job_title, location, "Every job source failed");
        }

        info!(
            job_title,
            location,
            sources = sources.len(),
            fetched,
            unique = jobs.len(),
            elapsed_ms = elapsed_ms(started),
            "Job aggregation completed"
        );

        ScrapeReport {
            jobs,
            sources,
            all_sources_failed,
        }
    }

    /// 并行调用所有数据源，按注册顺序返回结果
    async fn fetch_all(
        &self,
        job_title: &str,
        location: &str,
        started: Instant,
    ) -> Vec<SourceResult> {
        let deadline = tokio::time::Instant::now() + self.config.overall_timeout;
        let kinds = self.source_kinds();
        let mut tasks = JoinSet::new();

        for (index, source) in self.sources.iter().enumerate() {
            let source = Arc::clone(source);
            let kind = kinds[index];
            let job_title = job_title.to_string();
            let location = location.to_string();
            let source_timeout = self.config.source_timeout;

            tasks.spawn(async move {
                let source_started = Instant::now();
                let fetch = AssertUnwindSafe(source.fetch_jobs(&job_title, &location)).catch_unwind();

                let result = match tokio::time::timeout(source_timeout, fetch).await {
                    Ok(Ok(result)) => result,
                    Ok(Err(panic)) => SourceResult::failure(
                        kind,
                        SourceError::Parse(format!(
                            "adapter task failed: {}",
                            panic_message(panic.as_ref())
                        )),
                        elapsed_ms(source_started),
                    ),
                    Err(_) => SourceResult::failure(
                        kind,
                        SourceError::Timeout,
                        elapsed_ms(source_started),
                    ),
                };
                (index, result)
            });
        }

        let mut slots: Vec<Option<SourceResult>> = vec![None; self.sources.len()];

        let finished = tokio::time::timeout_at(deadline, async {
            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok((index, result)) => slots[index] = Some(result),
                    Err(e) => warn!("Job source task ended abnormally: {}", e),
                }
            }
        })
        .await;

        if finished.is_err() {
            warn!(
                pending = tasks.len(),
                "Overall deadline reached, aborting unfinished job sources"
            );
            tasks.abort_all();
        }

        let timed_out = finished.is_err();
        slots
            .into_iter()
            .zip(kinds)
            .map(|(slot, kind)| match slot {
                Some(mut result) => {
                    result.source = kind;
                    result
                }
                None if timed_out => {
                    SourceResult::failure(kind, SourceError::Timeout, elapsed_ms(started))
                }
                None => SourceResult::failure(
                    kind,
                    SourceError::Parse("adapter task failed".to_string()),
                    elapsed_ms(started),
                ),
            })
            .collect()
    }
}

fn log_source_result(result: &SourceResult) {
    let source = result.source.name();
    match &result.error {
        None => debug!(
            source,
            jobs = result.jobs.len(),
            elapsed_ms = result.elapsed_ms,
            "Job source succeeded"
        ),
        Some(error) if !result.jobs.is_empty() => warn!(
            source,
            jobs = result.jobs.len(),
            elapsed_ms = result.elapsed_ms,
            error = %error,
            "Job source returned partial results"
        ),
        Some(error) => warn!(
            source,
            elapsed_ms = result.elapsed_ms,
            error = %error,
            "Job source failed"
        ),
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic".to_string()
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
