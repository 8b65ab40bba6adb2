// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层单元测试
///
/// 去重与匹配组合在一起时的排序结果
pub mod ranking_test;
