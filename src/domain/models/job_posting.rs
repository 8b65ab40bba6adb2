// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::sources::SourceKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 薪资周期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SalaryPeriod {
    Year,
    Month,
    Week,
    Day,
    Hour,
    #[default]
    Unknown,
}

/// 归一化后的薪资区间
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
    /// ISO 4217 货币代码
    pub currency: String,
    #[serde(default)]
    pub period: SalaryPeriod,
}

impl SalaryRange {
    /// 创建薪资区间，自动保证 `min <= max`
    pub fn new(min: f64, max: f64, currency: impl Into<String>, period: SalaryPeriod) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            currency: currency.into(),
            period,
        }
    }
}

/// 归一化的职位记录
///
/// `url` 必须非空，它同时是去重时的最后兜底身份标识
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub source: SourceKind,
    #[serde(default)]
    pub external_id: String,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub salary_range: Option<SalaryRange>,
    #[serde(default)]
    pub skills_mentioned: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<f64>,
}

impl JobPosting {
    pub fn new(
        source: SourceKind,
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            source,
            external_id: String::new(),
            title: title.into(),
            company: company.into(),
            location: location.into(),
            description: String::new(),
            url: url.into(),
            posted_at: None,
            salary_range: None,
            skills_mentioned: BTreeSet::new(),
            match_percentage: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills_mentioned
            .extend(skills.into_iter().map(Into::into));
        self
    }

    /// 描述文本的有效长度（按字符计），用于去重时比较信息丰富程度
    pub fn description_richness(&self) -> usize {
        self.description.trim().chars().count()
    }
}
