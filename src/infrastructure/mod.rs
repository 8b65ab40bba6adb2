// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含与外部招聘网站交互的技术实现，以及抓取流程的并发编排。
///
/// 包含的子模块：
/// - 聚合器（aggregator）：并行调度所有数据源，施加超时并汇总结果
/// - 可观测性（observability）：指标的注册与记录
/// - 数据源（sources）：各招聘网站的 HTML / JSON 适配器及其工厂
///
/// 基础设施层依赖于领域层的 `JobSource` 抽象，领域层不感知具体站点。
pub mod aggregator;
pub mod observability;
pub mod sources;
