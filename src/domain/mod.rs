// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：职位、简历、薪资等核心数据结构
/// - 数据源接口（sources）：招聘网站适配器的抽象接口和结果类型
/// - 服务（services）：去重、技能提取、简历匹配和搜索编排
///
/// 领域层不依赖任何具体的网络实现，去重和匹配都是纯函数式的转换。
pub mod models;
pub mod services;
pub mod sources;
