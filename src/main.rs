// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::{bail, Context};
use jobmatch::config::settings::Settings;
use jobmatch::domain::models::resume::ResumeRecord;
use jobmatch::domain::services::job_matcher::JobMatcher;
use jobmatch::domain::services::job_search_service::JobSearchService;
use jobmatch::infrastructure::aggregator::{AggregatorConfig, JobAggregator};
use jobmatch::infrastructure::observability::init_metrics;
use jobmatch::infrastructure::sources::build_default_sources;
use jobmatch::utils::telemetry;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

const USAGE: &str = "usage: jobmatch <job title> <location> [resume.json]";

fn load_resume(path: &Path) -> anyhow::Result<ResumeRecord> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read resume {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid resume JSON in {}", path.display()))
}

/// 主函数
///
/// 加载配置并执行一次职位搜索，结果以 JSON 输出到标准输出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new().context("failed to load configuration")?;

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.logging);
    info!("Starting jobmatch...");

    if settings.metrics.enabled {
        if let Err(e) = init_metrics(&settings.metrics) {
            warn!("Metrics exporter disabled: {}", e);
        }
    }

    // 3. Parse arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (job_title, location, resume_path) = match args.as_slice() {
        [title, location] => (title.as_str(), location.as_str(), None),
        [title, location, resume] => (title.as_str(), location.as_str(), Some(Path::new(resume))),
        _ => bail!(USAGE),
    };
    if job_title.trim().is_empty() {
        bail!(USAGE);
    }

    let resume = resume_path.map(load_resume).transpose()?;

    // 4. Build sources and services
    let sources = build_default_sources(&settings);
    let aggregator = JobAggregator::new(sources, AggregatorConfig::from_settings(&settings))?;
    let service = JobSearchService::new(
        Arc::new(aggregator),
        JobMatcher::from_settings(&settings.matching),
    );

    // 5. Run the search
    let outcome = service.search(job_title, location, resume.as_ref()).await;
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
