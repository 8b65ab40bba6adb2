// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::sources::SourceError;
use crate::utils::text_processing::fold_text;
use url::Url;

/// 翻页方式
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pagination {
    /// 只有一页
    Single,
    /// 页码参数，`first` 为第一页的页码，第一页本身不带参数
    PageNumber { param: &'static str, first: u32 },
    /// 偏移量参数，按每页条数递增
    Offset { param: &'static str, per_page: u32 },
}

impl Pagination {
    fn param(&self, page: u32) -> Option<(&'static str, String)> {
        if page == 0 {
            return None;
        }
        match *self {
            Self::Single => None,
            Self::PageNumber { param, first } => Some((param, (first + page).to_string())),
            Self::Offset { param, per_page } => Some((param, (page * per_page).to_string())),
        }
    }
}

/// 搜索地址模板
#[derive(Debug)]
pub enum SearchUrl {
    /// 固定路径加查询参数，例如 `/jobs?q=rust&l=berlin`
    Query {
        path: &'static str,
        title_param: Option<&'static str>,
        location_param: Option<&'static str>,
        extra: &'static [(&'static str, &'static str)],
        pagination: Pagination,
    },
    /// 路径中嵌入职位和地点，例如 `/rust-developer-jobs-in-pune`
    ///
    /// `template` 中的 `{title}`、`{location}` 会被替换为 slug；
    /// 地点为空时改用 `without_location`
    PathSlug {
        template: &'static str,
        without_location: &'static str,
        pagination: Pagination,
    },
}

impl SearchUrl {
    pub fn pagination(&self) -> Pagination {
        match self {
            Self::Query { pagination, .. } | Self::PathSlug { pagination, .. } => *pagination,
        }
    }

    /// 生成第 `page` 页（从 0 开始）的搜索地址
    pub fn page_url(
        &self,
        base: &Url,
        job_title: &str,
        location: &str,
        page: u32,
    ) -> Result<Url, SourceError> {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        let path = match self {
            Self::Query {
                path,
                title_param,
                location_param,
                extra,
                ..
            } => {
                if let Some(param) = *title_param {
                    pairs.push((param, job_title.trim().to_string()));
                }
                if let Some(param) = *location_param {
                    if !location.trim().is_empty() {
                        pairs.push((param, location.trim().to_string()));
                    }
                }
                pairs.extend(extra.iter().map(|(k, v)| (*k, v.to_string())));
                path.to_string()
            }
            Self::PathSlug {
                template,
                without_location,
                ..
            } => {
                let title_slug = slugify(job_title);
                let location_slug = slugify(location);
                let template = if location_slug.is_empty() {
                    without_location
                } else {
                    template
                };
                template
                    .replace("{title}", &urlencoding::encode(&title_slug))
                    .replace("{location}", &urlencoding::encode(&location_slug))
            }
        };

        pairs.extend(self.pagination().param(page));

        let mut url = base
            .join(&path)
            .map_err(|e| SourceError::Parse(format!("invalid search path {}: {}", path, e)))?;

        if !pairs.is_empty() {
            let query = serde_urlencoded::to_string(&pairs)
                .map_err(|e| SourceError::Parse(format!("failed to encode query: {}", e)))?;
            url.set_query(Some(&query));
        }

        Ok(url)
    }
}

/// 生成 URL 路径用的 slug：`Senior Rust Developer` → `senior-rust-developer`
pub fn slugify(text: &str) -> String {
    fold_text(text)
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
