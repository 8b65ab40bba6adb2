// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_posting::JobPosting;
use crate::domain::sources::source_kind::SourceKind;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// 单个数据源的失败原因
///
/// 这些错误只在数据源内部产生，从不越过聚合器边界
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SourceError {
    #[error("Source timed out")]
    Timeout,
    #[error("Rate limit exceeded")]
    RateLimited,
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Network error: {0}")]
    Network(String),
}

impl SourceError {
    /// 用于日志和指标标签的短名称
    pub fn label(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::RateLimited => "rate_limited",
            Self::Parse(_) => "parse_error",
            Self::Network(_) => "network_error",
        }
    }

    /// 是否属于可重试的瞬时错误，限流与解析错误不重试
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout | Self::Network(_))
    }
}

/// 一次数据源调用的结果
///
/// `jobs` 始终是已成功解析的部分，即使 `error` 存在
#[derive(Debug, Clone)]
pub struct SourceResult {
    pub source: SourceKind,
    pub jobs: Vec<JobPosting>,
    pub error: Option<SourceError>,
    pub elapsed_ms: u64,
}

impl SourceResult {
    pub fn success(source: SourceKind, jobs: Vec<JobPosting>, elapsed_ms: u64) -> Self {
        Self {
            source,
            jobs,
            error: None,
            elapsed_ms,
        }
    }

    pub fn failure(source: SourceKind, error: SourceError, elapsed_ms: u64) -> Self {
        Self {
            source,
            jobs: Vec::new(),
            error: Some(error),
            elapsed_ms,
        }
    }

    pub fn partial(
        source: SourceKind,
        jobs: Vec<JobPosting>,
        error: SourceError,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            source,
            jobs,
            error: Some(error),
            elapsed_ms,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// A source counts as failed only when it errored and produced nothing.
    pub fn is_failure(&self) -> bool {
        self.error.is_some() && self.jobs.is_empty()
    }

    pub fn summary(&self) -> SourceSummary {
        SourceSummary {
            source: self.source,
            job_count: self.jobs.len(),
            error: self.error.as_ref().map(|e| e.to_string()),
            elapsed_ms: self.elapsed_ms,
        }
    }
}

/// 对外可见的数据源摘要
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSummary {
    pub source: SourceKind,
    pub job_count: usize,
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

/// 招聘网站适配器
///
/// 实现者负责构造查询 URL、发起请求、解析页面并归一化字段。
/// 任何失败都必须记录在返回的 `SourceResult` 中，而不是 panic 或返回错误。
#[async_trait]
pub trait JobSource: Send + Sync {
    /// 数据源标识
    fn kind(&self) -> SourceKind;

    /// 按职位名称和地点抓取职位
    async fn fetch_jobs(&self, job_title: &str, location: &str) -> SourceResult;
}
