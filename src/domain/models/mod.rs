// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 职位（job_posting）：从各数据源归一化后的职位记录
/// - 简历（resume）：由外部简历解析器提供的结构化候选人信息
///
/// 所有实体都只在单次搜索请求内存活，不做持久化。
pub mod job_posting;
pub mod resume;
