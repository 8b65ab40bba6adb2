// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含职位、简历等核心实体，以及去重、匹配和搜索服务
pub mod domain;

/// 基础设施模块
///
/// 实现各招聘网站的数据源适配器、并发聚合器和监控指标
pub mod infrastructure;

/// 工具模块
///
/// 提供文本清洗、URL、日期和薪资解析等通用辅助功能
pub mod utils;
