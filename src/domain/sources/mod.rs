// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据源领域模块
///
/// 定义招聘网站适配器的接口、来源标识以及单次抓取的结果类型
pub mod job_source;
pub mod source_kind;

pub use job_source::{JobSource, SourceError, SourceResult, SourceSummary};
pub use source_kind::SourceKind;
