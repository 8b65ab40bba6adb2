// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
/// 包括文本清洗、URL 归一化、日期与薪资解析、重试策略和日志初始化
pub mod date_parser;
pub mod retry_policy;
pub mod salary_parser;
pub mod telemetry;
pub mod text_processing;
pub mod url_utils;
