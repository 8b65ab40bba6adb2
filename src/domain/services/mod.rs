// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 去重（deduplicator）：合并跨站点重复发布的职位
/// - 简历匹配（job_matcher）：计算简历与职位的匹配百分比及其明细
/// - 搜索编排（job_search_service）：抓取、匹配、排序的完整流程
/// - 技能提取（skill_extractor）：从职位文本中识别归一化技能词
pub mod deduplicator;
pub mod job_matcher;
pub mod job_search_service;
pub mod skill_extractor;
