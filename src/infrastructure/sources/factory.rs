// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::sources::{JobSource, SourceError, SourceKind};
use crate::infrastructure::sources::html_board::HtmlBoardSource;
use crate::infrastructure::sources::html_profiles::html_profile;
use crate::infrastructure::sources::json_api::JsonApiSource;
use crate::infrastructure::sources::json_profiles::json_profile;
use std::sync::Arc;
use tracing::{info, warn};

/// 为单个来源创建适配器
///
/// 来源既没有 HTML 配置也没有 JSON 配置时返回 `Parse` 错误
pub fn build_source(
    kind: SourceKind,
    settings: &Settings,
) -> Result<Arc<dyn JobSource>, SourceError> {
    let source_settings = settings.source(kind);

    if let Some(profile) = html_profile(kind) {
        let source = HtmlBoardSource::new(profile, &settings.http, &source_settings)?;
        return Ok(Arc::new(source));
    }
    if let Some(profile) = json_profile(kind) {
        let source = JsonApiSource::new(profile, &settings.http, &source_settings)?;
        return Ok(Arc::new(source));
    }

    Err(SourceError::Parse(format!("no adapter profile for {}", kind)))
}

/// 创建所有启用的适配器，顺序与 `SourceKind::ALL` 一致
///
/// 单个适配器创建失败只记录警告，不影响其他来源
pub fn build_default_sources(settings: &Settings) -> Vec<Arc<dyn JobSource>> {
    let mut sources: Vec<Arc<dyn JobSource>> = Vec::with_capacity(SourceKind::ALL.len());

    for kind in SourceKind::ALL {
        if !settings.source(kind).enabled {
            info!(source = kind.name(), "Source disabled by configuration");
            continue;
        }
        match build_source(kind, settings) {
            Ok(source) => sources.push(source),
            Err(e) => warn!(source = kind.name(), "Failed to build source adapter: {}", e),
        }
    }

    info!(count = sources.len(), "Job source adapters ready");
    sources
}
