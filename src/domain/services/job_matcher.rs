// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MatchingSettings;
use crate::domain::models::job_posting::JobPosting;
use crate::domain::models::resume::ResumeRecord;
use crate::domain::services::skill_extractor::normalize_skill;
use crate::utils::text_processing::{fold_text, tokenize};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

static RANGE_YEARS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?:-|–|to)\s*(\d+(?:\.\d+)?)\s*\+?\s*(?:years?|yrs?)\b")
        .expect("Failed to compile year range regex")
});

static PLUS_YEARS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*\+\s*(?:years?|yrs?)\b").expect("Failed to compile N+ years regex")
});

static AT_LEAST_YEARS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:at least|minimum(?: of)?|min\.?)\s*(\d+(?:\.\d+)?)\s*(?:years?|yrs?)\b")
        .expect("Failed to compile minimum years regex")
});

static EXPERIENCE_YEARS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?:years?|yrs?)\s+(?:of\s+)?(?:\w+\s+)?(?:experience|exp)\b")
        .expect("Failed to compile years of experience regex")
});

/// 超过这个年限的数字视为噪声（例如 "100 years of history"）
const MAX_PLAUSIBLE_YEARS: f64 = 40.0;

/// 各项得分的权重
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    pub skills: f64,
    pub title: f64,
    pub experience: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.60,
            title: 0.25,
            experience: 0.15,
        }
    }
}

impl MatchWeights {
    /// 按权重之和归一化；非法权重退回默认值
    fn normalized(&self) -> Self {
        let parts = [self.skills, self.title, self.experience];
        let valid = parts.iter().all(|w| w.is_finite() && *w >= 0.0);
        let sum: f64 = parts.iter().sum();

        if !valid || sum <= 0.0 {
            return Self::default().normalized();
        }

        Self {
            skills: self.skills / sum,
            title: self.title / sum,
            experience: self.experience / sum,
        }
    }
}

/// 从职位文本推断出的工作年限要求区间
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceBand {
    pub min: f64,
    /// `None` 表示没有上限
    pub max: Option<f64>,
}

impl ExperienceBand {
    fn between(min: f64, max: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max: Some(max),
        }
    }

    fn at_least(min: f64) -> Self {
        Self { min, max: None }
    }

    /// 从职位标题和描述推断年限区间
    ///
    /// 优先使用描述中明确的年限表述，其次使用标题中的资历关键词
    pub fn infer(title: &str, description: &str) -> Option<Self> {
        let text = fold_text(&format!("{} {}", title, description));
        let plausible = |value: f64| (0.0..=MAX_PLAUSIBLE_YEARS).contains(&value);
        let number = |raw: &str| raw.parse::<f64>().ok().filter(|v| plausible(*v));

        if let Some(caps) = RANGE_YEARS_REGEX.captures(&text) {
            if let (Some(min), Some(max)) = (number(&caps[1]), number(&caps[2])) {
                return Some(Self::between(min, max));
            }
        }

        for regex in [&*PLUS_YEARS_REGEX, &*AT_LEAST_YEARS_REGEX, &*EXPERIENCE_YEARS_REGEX] {
            if let Some(min) = regex.captures(&text).and_then(|caps| number(&caps[1])) {
                return Some(Self::at_least(min));
            }
        }

        Self::from_seniority(title)
    }

    fn from_seniority(title: &str) -> Option<Self> {
        let tokens: HashSet<String> = tokenize(title).into_iter().collect();
        let has = |words: &[&str]| words.iter().any(|w| tokens.contains(*w));

        if has(&["lead", "principal", "staff", "head", "architect"]) {
            Some(Self::at_least(7.0))
        } else if has(&["senior", "sr"]) {
            Some(Self::at_least(5.0))
        } else if has(&["mid", "intermediate"]) {
            Some(Self::between(2.0, 5.0))
        } else if has(&["intern", "internship", "trainee", "junior", "jr", "entry", "graduate", "fresher"]) {
            Some(Self::between(0.0, 2.0))
        } else {
            None
        }
    }

    /// 区间内得 1 分，区间外按 `decay_years` 线性衰减到 0
    fn score(&self, years: f64, decay_years: f64) -> f64 {
        let years = years.max(0.0);
        let distance = if years < self.min {
            self.min - years
        } else {
            match self.max {
                Some(max) if years > max => years - max,
                _ => 0.0,
            }
        };
        (1.0 - distance / decay_years).clamp(0.0, 1.0)
    }
}

/// 单个职位的匹配明细
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchBreakdown {
    pub skill_overlap: f64,
    pub title_similarity: f64,
    pub experience_fit: f64,
    pub match_percentage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// 预先归一化的简历信息，批量打分时只计算一次
struct ResumeProfile {
    skills: BTreeSet<String>,
    title_tokens: HashSet<String>,
    years_experience: Option<f64>,
}

impl ResumeProfile {
    fn new(resume: &ResumeRecord) -> Self {
        Self {
            skills: resume
                .skills
                .iter()
                .map(|skill| normalize_skill(skill))
                .filter(|skill| !skill.is_empty())
                .collect(),
            title_tokens: resume
                .most_recent_title()
                .map(|title| tokenize(title).into_iter().collect())
                .unwrap_or_default(),
            years_experience: resume.years_experience.filter(|y| y.is_finite()),
        }
    }
}

/// 简历与职位匹配器
///
/// 匹配度由三部分加权组成：技能重合度、职位名称相似度、工作年限吻合度。
/// 结果是 [0, 100] 区间内的整数值，纯函数，不修改输入。
#[derive(Debug, Clone)]
pub struct JobMatcher {
    weights: MatchWeights,
    experience_decay_years: f64,
    default_experience_score: f64,
}

impl Default for JobMatcher {
    fn default() -> Self {
        Self::new(MatchWeights::default(), 5.0, 0.5)
    }
}

impl JobMatcher {
    pub fn new(
        weights: MatchWeights,
        experience_decay_years: f64,
        default_experience_score: f64,
    ) -> Self {
        let experience_decay_years = if experience_decay_years.is_finite() && experience_decay_years > 0.0 {
            experience_decay_years
        } else {
            5.0
        };
        let default_experience_score = if default_experience_score.is_finite() {
            default_experience_score.clamp(0.0, 1.0)
        } else {
            0.5
        };

        Self {
            weights: weights.normalized(),
            experience_decay_years,
            default_experience_score,
        }
    }

    pub fn from_settings(settings: &MatchingSettings) -> Self {
        Self::new(
            MatchWeights {
                skills: settings.skill_weight,
                title: settings.title_weight,
                experience: settings.experience_weight,
            },
            settings.experience_decay_years,
            settings.default_experience_score,
        )
    }

    /// 计算简历与职位的匹配度，范围 [0, 100]
    pub fn calculate_match_percentage(&self, resume: &ResumeRecord, job: &JobPosting) -> f64 {
        self.score(&ResumeProfile::new(resume), job).match_percentage
    }

    /// 计算匹配明细
    pub fn breakdown(&self, resume: &ResumeRecord, job: &JobPosting) -> MatchBreakdown {
        self.score(&ResumeProfile::new(resume), job)
    }

    /// 为每个职位打分并按匹配度降序稳定排序，同分保持原有顺序
    pub fn rank_jobs(&self, resume: &ResumeRecord, mut jobs: Vec<JobPosting>) -> Vec<JobPosting> {
        let profile = ResumeProfile::new(resume);

        for job in jobs.iter_mut() {
            job.match_percentage = Some(self.score(&profile, job).match_percentage);
        }

        jobs.sort_by(|a, b| {
            let a = a.match_percentage.unwrap_or(0.0);
            let b = b.match_percentage.unwrap_or(0.0);
            b.total_cmp(&a)
        });
        jobs
    }

    fn score(&self, profile: &ResumeProfile, job: &JobPosting) -> MatchBreakdown {
        let job_skills: BTreeSet<String> = job
            .skills_mentioned
            .iter()
            .map(|skill| normalize_skill(skill))
            .filter(|skill| !skill.is_empty())
            .collect();

        let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = job_skills
            .iter()
            .cloned()
            .partition(|skill| profile.skills.contains(skill));

        let skill_overlap = if job_skills.is_empty() {
            0.0
        } else {
            matched_skills.len() as f64 / job_skills.len() as f64
        };

        let title_similarity = jaccard(&profile.title_tokens, &tokenize(&job.title).into_iter().collect());

        let experience_fit = match ExperienceBand::infer(&job.title, &job.description) {
            None => self.default_experience_score,
            Some(band) => match profile.years_experience {
                Some(years) => band.score(years, self.experience_decay_years),
                None => 0.0,
            },
        };

        let skill_overlap = skill_overlap.clamp(0.0, 1.0);
        let title_similarity = title_similarity.clamp(0.0, 1.0);
        let experience_fit = experience_fit.clamp(0.0, 1.0);

        let total = self.weights.skills * skill_overlap
            + self.weights.title * title_similarity
            + self.weights.experience * experience_fit;

        MatchBreakdown {
            skill_overlap,
            title_similarity,
            experience_fit,
            match_percentage: to_percentage(total),
            matched_skills,
            missing_skills,
        }
    }
}

/// 使用默认权重计算匹配度
pub fn calculate_match_percentage(resume: &ResumeRecord, job: &JobPosting) -> f64 {
    JobMatcher::default().calculate_match_percentage(resume, job)
}

fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    intersection / union
}

fn to_percentage(total: f64) -> f64 {
    if total.is_nan() {
        return 0.0;
    }
    (total * 100.0).round().clamp(0.0, 100.0)
}
