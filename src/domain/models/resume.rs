// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 结构化的候选人简历
///
/// 由外部简历解析器生成，匹配器只读取不修改。所有字段都可缺省，
/// 缺失字段会让对应的子分数趋向 0，而不是报错。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub skills: BTreeSet<String>,
    pub years_experience: Option<f64>,
    /// 过往职位，最近的在最前
    pub titles: Vec<String>,
    pub education: Vec<String>,
    pub location: Option<String>,
}

impl ResumeRecord {
    /// 最近一份工作的职位名称
    pub fn most_recent_title(&self) -> Option<&str> {
        self.titles
            .iter()
            .map(|t| t.trim())
            .find(|t| !t.is_empty())
    }
}
