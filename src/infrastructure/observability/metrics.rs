// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use crate::domain::sources::SourceResult;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use thiserror::Error;
use tracing::info;

/// 指标初始化错误
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Invalid metrics listen address: {0}")]
    InvalidAddress(#[from] std::net::AddrParseError),
    #[error("Failed to install Prometheus recorder: {0}")]
    Install(#[from] BuildError),
}

/// 注册指标描述
///
/// 未安装 recorder 时这些宏都是空操作，库代码和测试无需关心
pub fn describe_metrics() {
    describe_counter!(
        "job_source_requests_total",
        "Total number of job source fetches, labelled by source and outcome"
    );
    describe_histogram!(
        "job_source_duration_seconds",
        "Duration of job source fetches in seconds"
    );
    describe_counter!(
        "job_source_jobs_total",
        "Total number of postings returned by each job source"
    );
    describe_counter!(
        "job_aggregator_runs_total",
        "Total number of aggregation runs"
    );
    describe_counter!(
        "job_aggregator_all_sources_failed_total",
        "Total number of aggregation runs in which every source failed"
    );
}

/// 初始化指标系统
///
/// 在 `listen_addr` 上启动 Prometheus 导出端点并注册指标描述，
/// 需要在 tokio 运行时中调用
pub fn init_metrics(settings: &MetricsSettings) -> Result<(), MetricsError> {
    let addr: SocketAddr = settings.listen_addr.parse()?;
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;

    describe_metrics();
    info!(%addr, "Prometheus exporter listening");
    Ok(())
}

/// 记录一次数据源调用的结果
pub fn record_source_result(result: &SourceResult) {
    let source = result.source.name();
    let outcome = match &result.error {
        None => "success",
        Some(_) if !result.jobs.is_empty() => "partial",
        Some(error) => error.label(),
    };

    counter!("job_source_requests_total", "source" => source, "outcome" => outcome).increment(1);
    counter!("job_source_jobs_total", "source" => source).increment(result.jobs.len() as u64);
    histogram!("job_source_duration_seconds", "source" => source)
        .record(result.elapsed_ms as f64 / 1000.0);
}
