// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将可能为相对路径的URL转换为绝对路径URL
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path)
}

/// 判断查询参数是否属于跟踪参数
///
/// 列表项以 `*` 结尾时按前缀匹配，例如 `utm_*`
fn is_tracking_param(name: &str, tracking_params: &[String]) -> bool {
    let name = name.to_ascii_lowercase();
    tracking_params.iter().any(|pattern| {
        let pattern = pattern.to_ascii_lowercase();
        match pattern.strip_suffix('*') {
            Some(prefix) => name.starts_with(prefix),
            None => name == pattern,
        }
    })
}

/// 生成职位 URL 的去重键
///
/// - scheme 和 host 小写（由 `url` 解析保证），去掉默认端口
/// - 去掉片段标识符和跟踪参数，其余参数排序
/// - 去掉路径末尾的斜杠
///
/// 无法解析的 URL 退化为去空白后的小写文本
pub fn normalize_job_url(raw: &str, tracking_params: &[String]) -> String {
    let trimmed = raw.trim();
    let Ok(mut url) = Url::parse(trimmed) else {
        return trimmed.trim_end_matches('/').to_lowercase();
    };

    url.set_fragment(None);

    let mut kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(name, _)| !is_tracking_param(name, tracking_params))
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();
    kept.sort();

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }

    let path = url.path().trim_end_matches('/').to_string();
    if path.is_empty() {
        url.set_path("/");
    } else {
        url.set_path(&path);
    }

    let mut normalized = url.to_string();
    if url.query().is_none() && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}
