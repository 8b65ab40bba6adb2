// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置，包括聚合器超时、匹配权重、去重参数和数据源覆盖等配置
pub mod settings;
