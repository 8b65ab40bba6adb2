// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层单元测试
///
/// 使用固定页面验证各招聘网站的选择器配置
pub mod board_parsing_test;
