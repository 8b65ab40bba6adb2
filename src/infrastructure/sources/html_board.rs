// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{HttpSettings, SourceSettings};
use crate::domain::models::job_posting::JobPosting;
use crate::domain::services::skill_extractor::extract_skills;
use crate::domain::sources::{JobSource, SourceError, SourceKind, SourceResult};
use crate::infrastructure::sources::http_fetcher::HttpFetcher;
use crate::infrastructure::sources::search_url::SearchUrl;
use crate::utils::date_parser::parse_posted_date;
use crate::utils::salary_parser::parse_salary;
use crate::utils::text_processing::{clean_html_text, normalize_whitespace, truncate_chars};
use crate::utils::url_utils::resolve_url;
use async_trait::async_trait;
use chrono::Utc;
use scraper::{ElementRef, Html, Selector};
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;

/// HTML 招聘网站的静态描述
///
/// 每个字段都是候选 CSS 选择器列表，按顺序尝试，第一个命中的生效
#[derive(Debug)]
pub struct HtmlBoardProfile {
    pub kind: SourceKind,
    pub base_url: &'static str,
    pub search: SearchUrl,
    pub card: &'static [&'static str],
    pub title: &'static [&'static str],
    /// 链接元素选择器，未命中时使用标题元素或卡片自身的 `href`
    pub link: &'static [&'static str],
    pub company: &'static [&'static str],
    pub location: &'static [&'static str],
    pub summary: &'static [&'static str],
    pub salary: &'static [&'static str],
    pub posted: &'static [&'static str],
    /// 卡片或链接上携带站内职位 ID 的属性
    pub id_attributes: &'static [&'static str],
    pub default_currency: &'static str,
    pub default_max_pages: u32,
}

/// 编译后的候选选择器列表
///
/// 无法解析的选择器会被记录并跳过，不会让整个适配器失效
struct SelectorList(Vec<Selector>);

impl SelectorList {
    fn compile(source: SourceKind, raw: &[&str]) -> Self {
        let selectors = raw
            .iter()
            .filter_map(|s| match Selector::parse(s) {
                Ok(selector) => Some(selector),
                Err(e) => {
                    warn!(source = source.name(), selector = *s, "Invalid CSS selector: {}", e);
                    None
                }
            })
            .collect();
        Self(selectors)
    }

    fn first<'a>(&self, element: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.0
            .iter()
            .find_map(|selector| element.select(selector).next())
    }

    fn text(&self, element: ElementRef<'_>) -> Option<String> {
        self.0.iter().find_map(|selector| {
            element
                .select(selector)
                .map(element_text)
                .find(|text| !text.is_empty())
        })
    }
}

struct CompiledSelectors {
    card: SelectorList,
    title: SelectorList,
    link: SelectorList,
    company: SelectorList,
    location: SelectorList,
    summary: SelectorList,
    salary: SelectorList,
    posted: SelectorList,
}

impl CompiledSelectors {
    fn new(profile: &HtmlBoardProfile) -> Self {
        let compile = |raw: &[&str]| SelectorList::compile(profile.kind, raw);
        Self {
            card: compile(profile.card),
            title: compile(profile.title),
            link: compile(profile.link),
            company: compile(profile.company),
            location: compile(profile.location),
            summary: compile(profile.summary),
            salary: compile(profile.salary),
            posted: compile(profile.posted),
        }
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    normalize_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}

/// 基于 CSS 选择器的 HTML 招聘网站适配器
pub struct HtmlBoardSource {
    profile: &'static HtmlBoardProfile,
    selectors: CompiledSelectors,
    base_url: Url,
    max_pages: u32,
    max_description_chars: usize,
    fetcher: HttpFetcher,
}

impl HtmlBoardSource {
    pub fn new(
        profile: &'static HtmlBoardProfile,
        http: &HttpSettings,
        settings: &SourceSettings,
    ) -> Result<Self, SourceError> {
        let raw_base = settings.base_url.as_deref().unwrap_or(profile.base_url);
        let base_url = Url::parse(raw_base)
            .map_err(|e| SourceError::Parse(format!("invalid base URL {}: {}", raw_base, e)))?;

        Ok(Self {
            profile,
            selectors: CompiledSelectors::new(profile),
            base_url,
            max_pages: settings.max_pages.unwrap_or(profile.default_max_pages).max(1),
            max_description_chars: http.max_description_chars,
            fetcher: HttpFetcher::new(profile.kind, http, settings.requests_per_minute)?,
        })
    }

    /// 解析一页搜索结果
    ///
    /// 没有任何卡片时返回空列表（视为没有更多结果）；
    /// 有卡片但全部无法解析时返回 `Parse` 错误
    pub fn parse_listings(&self, html: &str) -> Result<Vec<JobPosting>, SourceError> {
        let document = Html::parse_document(html);
        let root = document.root_element();

        let cards: Vec<ElementRef<'_>> = self
            .selectors
            .card
            .0
            .iter()
            .map(|selector| root.select(selector).collect::<Vec<_>>())
            .find(|cards| !cards.is_empty())
            .unwrap_or_default();

        let mut jobs = Vec::with_capacity(cards.len());
        let mut skipped = 0usize;

        for card in &cards {
            match self.parse_card(*card) {
                Some(job) => jobs.push(job),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!(
                source = self.profile.kind.name(),
                skipped,
                parsed = jobs.len(),
                "Skipped job cards without title or link"
            );
        }

        if !cards.is_empty() && jobs.is_empty() {
            return Err(SourceError::Parse(format!(
                "{} job cards found but none could be parsed",
                cards.len()
            )));
        }

        Ok(jobs)
    }

    fn parse_card(&self, card: ElementRef<'_>) -> Option<JobPosting> {
        let selectors = &self.selectors;
        let title_element = selectors.title.first(card);
        let title = title_element
            .map(element_text)
            .filter(|title| !title.is_empty())
            .or_else(|| selectors.title.text(card))?;

        let link_element = selectors
            .link
            .first(card)
            .filter(|element| element.value().attr("href").is_some())
            .or_else(|| title_element.filter(|element| element.value().attr("href").is_some()))
            .or_else(|| Some(card).filter(|element| element.value().attr("href").is_some()))?;

        let href = link_element.value().attr("href")?.trim();
        if href.is_empty() || href.starts_with("javascript:") || href == "#" {
            return None;
        }
        let url = resolve_url(&self.base_url, href).ok()?;

        let company = selectors.company.text(card).unwrap_or_default();
        let location = selectors.location.text(card).unwrap_or_default();

        let description = selectors
            .summary
            .first(card)
            .map(|element| clean_html_text(&element.inner_html()))
            .map(|text| truncate_chars(&text, self.max_description_chars))
            .unwrap_or_default();

        let mut job = JobPosting::new(self.profile.kind, title, company, location, url.to_string())
            .with_description(description);

        if let Some(id) = self.external_id(card, link_element) {
            job.external_id = id;
        }

        job.salary_range = selectors
            .salary
            .text(card)
            .and_then(|text| parse_salary(&text, self.profile.default_currency));

        job.posted_at = selectors.posted.first(card).and_then(|element| {
            let text = element
                .value()
                .attr("datetime")
                .map(str::to_string)
                .unwrap_or_else(|| element_text(element));
            parse_posted_date(&text, Utc::now())
        });

        job.skills_mentioned = extract_skills(&format!("{} {}", job.title, job.description));
        Some(job)
    }

    fn external_id(&self, card: ElementRef<'_>, link: ElementRef<'_>) -> Option<String> {
        self.profile.id_attributes.iter().find_map(|attr| {
            card.value()
                .attr(attr)
                .or_else(|| link.value().attr(attr))
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
        })
    }
}

#[async_trait]
impl JobSource for HtmlBoardSource {
    fn kind(&self) -> SourceKind {
        self.profile.kind
    }

    async fn fetch_jobs(&self, job_title: &str, location: &str) -> SourceResult {
        let started = Instant::now();
        let kind = self.profile.kind;
        let elapsed = || started.elapsed().as_millis() as u64;
        let mut jobs = Vec::new();

        for page in 0..self.max_pages {
            let outcome = match self
                .profile
                .search
                .page_url(&self.base_url, job_title, location, page)
            {
                Ok(url) => match self.fetcher.fetch_text(&url).await {
                    Ok(body) => self.parse_listings(&body),
                    Err(e) => Err(e),
                },
                Err(e) => Err(e),
            };

            match outcome {
                Ok(page_jobs) if page_jobs.is_empty() => break,
                Ok(page_jobs) => {
                    debug!(source = kind.name(), page, jobs = page_jobs.len(), "Parsed result page");
                    jobs.extend(page_jobs);
                }
                Err(error) if jobs.is_empty() => {
                    return SourceResult::failure(kind, error, elapsed());
                }
                Err(error) => {
                    return SourceResult::partial(kind, jobs, error, elapsed());
                }
            }
        }

        SourceResult::success(kind, jobs, elapsed())
    }
}
