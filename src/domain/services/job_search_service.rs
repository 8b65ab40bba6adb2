// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_posting::JobPosting;
use crate::domain::models::resume::ResumeRecord;
use crate::domain::services::job_matcher::JobMatcher;
use crate::domain::sources::SourceSummary;
use crate::infrastructure::aggregator::JobAggregator;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// 所有数据源都失败时附带的提示
pub const SOURCES_UNAVAILABLE_NOTE: &str = "Real job sources temporarily unavailable";

/// 一次职位搜索的对外结果
///
/// 即使所有数据源都失败，`success` 仍为 true，只是职位列表为空并附带提示
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub success: bool,
    pub jobs: Vec<JobPosting>,
    pub total: usize,
    pub sources: Vec<SourceSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// 职位搜索服务：抓取 → （可选）简历匹配 → 排序
pub struct JobSearchService {
    aggregator: Arc<JobAggregator>,
    matcher: JobMatcher,
}

impl JobSearchService {
    pub fn new(aggregator: Arc<JobAggregator>, matcher: JobMatcher) -> Self {
        Self {
            aggregator,
            matcher,
        }
    }

    /// 按职位名称和地点搜索
    ///
    /// 提供简历时为每个职位计算匹配度并按匹配度降序稳定排序，
    /// 否则保持聚合器输出的顺序
    pub async fn search(
        &self,
        job_title: &str,
        location: &str,
        resume: Option<&ResumeRecord>,
    ) -> SearchOutcome {
        let report = self
            .aggregator
            .scrape_with_report(job_title, location)
            .await;

        let note = if report.all_sources_failed {
            warn!(job_title, location, "All job sources failed");
            Some(SOURCES_UNAVAILABLE_NOTE.to_string())
        } else {
            None
        };

        let jobs = match resume {
            Some(resume) => self.matcher.rank_jobs(resume, report.jobs),
            None => report.jobs,
        };

        info!(
            job_title,
            location,
            jobs = jobs.len(),
            ranked = resume.is_some(),
            "Job search completed"
        );

        SearchOutcome {
            success: true,
            total: jobs.len(),
            jobs,
            sources: report.sources,
            note,
            timestamp: Utc::now(),
        }
    }
}
