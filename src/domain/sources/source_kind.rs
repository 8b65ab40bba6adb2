// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 招聘网站来源标识
///
/// 变体的声明顺序即默认注册顺序，也是聚合结果的来源优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Indeed,
    LinkedIn,
    Naukri,
    Glassdoor,
    Monster,
    SimplyHired,
    ZipRecruiter,
    CareerBuilder,
    Dice,
    TimesJobs,
    Shine,
    Foundit,
    Jooble,
    Reed,
    Totaljobs,
    Internshala,
    Seek,
    Remotive,
    Arbeitnow,
    TheMuse,
    RemoteOk,
    Jobicy,
    Himalayas,
}

impl SourceKind {
    /// 所有已知来源，按优先级排列
    pub const ALL: [SourceKind; 23] = [
        Self::Indeed,
        Self::LinkedIn,
        Self::Naukri,
        Self::Glassdoor,
        Self::Monster,
        Self::SimplyHired,
        Self::ZipRecruiter,
        Self::CareerBuilder,
        Self::Dice,
        Self::TimesJobs,
        Self::Shine,
        Self::Foundit,
        Self::Jooble,
        Self::Reed,
        Self::Totaljobs,
        Self::Internshala,
        Self::Seek,
        Self::Remotive,
        Self::Arbeitnow,
        Self::TheMuse,
        Self::RemoteOk,
        Self::Jobicy,
        Self::Himalayas,
    ];

    /// 配置文件和指标标签中使用的名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Indeed => "indeed",
            Self::LinkedIn => "linked_in",
            Self::Naukri => "naukri",
            Self::Glassdoor => "glassdoor",
            Self::Monster => "monster",
            Self::SimplyHired => "simply_hired",
            Self::ZipRecruiter => "zip_recruiter",
            Self::CareerBuilder => "career_builder",
            Self::Dice => "dice",
            Self::TimesJobs => "times_jobs",
            Self::Shine => "shine",
            Self::Foundit => "foundit",
            Self::Jooble => "jooble",
            Self::Reed => "reed",
            Self::Totaljobs => "totaljobs",
            Self::Internshala => "internshala",
            Self::Seek => "seek",
            Self::Remotive => "remotive",
            Self::Arbeitnow => "arbeitnow",
            Self::TheMuse => "the_muse",
            Self::RemoteOk => "remote_ok",
            Self::Jobicy => "jobicy",
            Self::Himalayas => "himalayas",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().replace('_', "") == wanted)
            .ok_or_else(|| format!("unknown job source: {}", s))
    }
}
