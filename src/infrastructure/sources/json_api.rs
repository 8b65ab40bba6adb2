// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{HttpSettings, SourceSettings};
use crate::domain::models::job_posting::{JobPosting, SalaryPeriod, SalaryRange};
use crate::domain::services::skill_extractor::{canonical_skill, extract_skills};
use crate::domain::sources::{JobSource, SourceError, SourceKind, SourceResult};
use crate::infrastructure::sources::http_fetcher::HttpFetcher;
use crate::infrastructure::sources::search_url::SearchUrl;
use crate::utils::date_parser::{from_unix_timestamp, parse_posted_date};
use crate::utils::salary_parser::parse_salary;
use crate::utils::text_processing::{clean_html_text, tokenize, truncate_chars};
use crate::utils::url_utils::resolve_url;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashSet;
use std::time::Instant;
use tracing::debug;
use url::Url;

/// JSON 字段映射，每个字段是候选 JSON Pointer 列表，按顺序尝试
#[derive(Debug)]
pub struct JsonFieldMap {
    pub id: &'static [&'static str],
    pub title: &'static [&'static str],
    pub company: &'static [&'static str],
    pub location: &'static [&'static str],
    pub description: &'static [&'static str],
    pub url: &'static [&'static str],
    pub posted: &'static [&'static str],
    pub salary_min: &'static [&'static str],
    pub salary_max: &'static [&'static str],
    pub salary_currency: &'static [&'static str],
    /// 薪资只有文本形式时使用
    pub salary_text: &'static [&'static str],
    pub tags: &'static [&'static str],
}

/// JSON 招聘接口的静态描述
#[derive(Debug)]
pub struct JsonApiProfile {
    pub kind: SourceKind,
    pub base_url: &'static str,
    pub search: SearchUrl,
    /// 职位数组所在位置，空字符串表示根节点就是数组
    pub items: &'static str,
    pub fields: JsonFieldMap,
    /// 接口不支持关键词搜索时，在本地按职位名称过滤
    pub filter_by_title: bool,
    pub default_currency: &'static str,
}

/// 将 JSON 值转换为文本
///
/// 数组按逗号连接，对象取 `name` 字段（例如 `{"name": "Berlin"}`）
fn value_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(value_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => map.get("name").and_then(value_text)?,
        Value::Bool(_) | Value::Null => return None,
    };
    Some(text).filter(|t| !t.is_empty())
}

fn value_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.replace(',', "").trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite() && *n > 0.0)
}

fn value_date(value: &Value, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n.as_i64().and_then(from_unix_timestamp),
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(ts) => from_unix_timestamp(ts),
            Err(_) => parse_posted_date(s, now),
        },
        _ => None,
    }
}

fn first_match<'a, T>(
    item: &'a Value,
    pointers: &[&str],
    convert: impl Fn(&'a Value) -> Option<T>,
) -> Option<T> {
    pointers
        .iter()
        .filter_map(|pointer| item.pointer(pointer))
        .find_map(convert)
}

/// 基于 JSON Pointer 字段映射的招聘接口适配器
pub struct JsonApiSource {
    profile: &'static JsonApiProfile,
    base_url: Url,
    max_description_chars: usize,
    fetcher: HttpFetcher,
}

impl JsonApiSource {
    pub fn new(
        profile: &'static JsonApiProfile,
        http: &HttpSettings,
        settings: &SourceSettings,
    ) -> Result<Self, SourceError> {
        let raw_base = settings.base_url.as_deref().unwrap_or(profile.base_url);
        let base_url = Url::parse(raw_base)
            .map_err(|e| SourceError::Parse(format!("invalid base URL {}: {}", raw_base, e)))?;

        Ok(Self {
            profile,
            base_url,
            max_description_chars: http.max_description_chars,
            fetcher: HttpFetcher::new(profile.kind, http, settings.requests_per_minute)?,
        })
    }

    /// 解析接口响应
    ///
    /// 缺少标题或链接的条目被跳过；有条目但全部无法解析时返回 `Parse` 错误
    pub fn parse_response(
        &self,
        body: &Value,
        job_title: &str,
    ) -> Result<Vec<JobPosting>, SourceError> {
        let items = if self.profile.items.is_empty() {
            Some(body)
        } else {
            body.pointer(self.profile.items)
        }
        .and_then(Value::as_array)
        .ok_or_else(|| {
            SourceError::Parse(format!(
                "missing job array at '{}'",
                self.profile.items
            ))
        })?;

        let now = Utc::now();
        let mut jobs = Vec::with_capacity(items.len());
        let mut skipped = 0usize;

        for item in items {
            match self.parse_item(item, now) {
                Some(job) => jobs.push(job),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!(
                source = self.profile.kind.name(),
                skipped,
                parsed = jobs.len(),
                "Skipped JSON items without title or link"
            );
        }

        if !items.is_empty() && jobs.is_empty() {
            return Err(SourceError::Parse(format!(
                "{} items found but none could be parsed",
                items.len()
            )));
        }

        if self.profile.filter_by_title {
            jobs.retain(|job| matches_title(job, job_title));
        }

        Ok(jobs)
    }

    fn parse_item(&self, item: &Value, now: DateTime<Utc>) -> Option<JobPosting> {
        let fields = &self.profile.fields;
        let text = |pointers: &[&str]| first_match(item, pointers, value_text);

        let title = text(fields.title)?;
        let raw_url = text(fields.url)?;
        let url = resolve_url(&self.base_url, &raw_url).ok()?;

        let description = text(fields.description)
            .map(|html| clean_html_text(&html))
            .map(|plain| truncate_chars(&plain, self.max_description_chars))
            .unwrap_or_default();

        let mut job = JobPosting::new(
            self.profile.kind,
            title,
            text(fields.company).unwrap_or_default(),
            text(fields.location).unwrap_or_default(),
            url.to_string(),
        )
        .with_description(description);

        if let Some(id) = text(fields.id) {
            job.external_id = id;
        }

        job.posted_at = first_match(item, fields.posted, |v| value_date(v, now));
        job.salary_range = self.salary(item);

        let tags: Vec<String> = fields
            .tags
            .iter()
            .filter_map(|pointer| item.pointer(pointer))
            .filter_map(Value::as_array)
            .flatten()
            .filter_map(value_text)
            .collect();

        job.skills_mentioned = extract_skills(&format!("{} {}", job.title, job.description));
        job.skills_mentioned
            .extend(tags.iter().filter_map(|tag| canonical_skill(tag)));

        Some(job)
    }

    fn salary(&self, item: &Value) -> Option<SalaryRange> {
        let fields = &self.profile.fields;
        let min = first_match(item, fields.salary_min, value_number);
        let max = first_match(item, fields.salary_max, value_number);
        let currency = first_match(item, fields.salary_currency, value_text)
            .unwrap_or_else(|| self.profile.default_currency.to_string());

        match (min, max) {
            (Some(min), Some(max)) => Some(SalaryRange::new(min, max, currency, SalaryPeriod::Year)),
            (Some(only), None) | (None, Some(only)) => {
                Some(SalaryRange::new(only, only, currency, SalaryPeriod::Year))
            }
            (None, None) => first_match(item, fields.salary_text, value_text)
                .and_then(|text| parse_salary(&text, self.profile.default_currency)),
        }
    }
}

/// 职位名称（含标签）是否包含查询中的每个词
fn matches_title(job: &JobPosting, job_title: &str) -> bool {
    let wanted = tokenize(job_title);
    if wanted.is_empty() {
        return true;
    }
    let have: HashSet<String> = tokenize(&job.title)
        .into_iter()
        .chain(job.skills_mentioned.iter().flat_map(|skill| tokenize(skill)))
        .collect();
    wanted.iter().all(|token| have.contains(token))
}

#[async_trait]
impl JobSource for JsonApiSource {
    fn kind(&self) -> SourceKind {
        self.profile.kind
    }

    async fn fetch_jobs(&self, job_title: &str, location: &str) -> SourceResult {
        let started = Instant::now();
        let kind = self.profile.kind;
        let elapsed = || started.elapsed().as_millis() as u64;

        let outcome = match self
            .profile
            .search
            .page_url(&self.base_url, job_title, location, 0)
        {
            Ok(url) => match self.fetcher.fetch_json(&url).await {
                Ok(body) => self.parse_response(&body, job_title),
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        };

        match outcome {
            Ok(jobs) => SourceResult::success(kind, jobs, elapsed()),
            Err(error) => SourceResult::failure(kind, error, elapsed()),
        }
    }
}
