// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 可观测性模块
///
/// 提供数据源抓取相关的指标注册与记录
pub mod metrics;

pub use metrics::{describe_metrics, init_metrics, record_source_result, MetricsError};
