// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::HttpSettings;
use crate::domain::sources::{SourceError, SourceKind};
use crate::utils::retry_policy::RetryPolicy;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::StatusCode;
use std::num::NonZeroU32;
use std::time::Duration;
use tracing::debug;
use url::Url;

static PAGE_TITLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("Failed to compile page title regex")
});

/// 反爬页面标题中的特征词
const BLOCK_PAGE_MARKERS: &[&str] = &[
    "captcha",
    "robot check",
    "are you a robot",
    "are you human",
    "just a moment",
    "attention required",
    "security check",
    "access denied",
    "unusual traffic",
];

/// 单次请求的失败，附带是否值得重试
#[derive(Debug)]
struct AttemptFailure {
    error: SourceError,
    retryable: bool,
}

impl AttemptFailure {
    fn transient(error: SourceError) -> Self {
        Self {
            error,
            retryable: true,
        }
    }

    fn fatal(error: SourceError) -> Self {
        Self {
            error,
            retryable: false,
        }
    }
}

impl From<reqwest::Error> for AttemptFailure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::transient(SourceError::Timeout)
        } else if e.is_connect() || e.is_request() {
            Self::transient(SourceError::Network(e.to_string()))
        } else if e.is_decode() || e.is_body() {
            Self::fatal(SourceError::Parse(e.to_string()))
        } else {
            Self::fatal(SourceError::Network(e.to_string()))
        }
    }
}

/// 判断页面是否为验证码或反爬拦截页
pub fn is_blocked_page(body: &str) -> bool {
    PAGE_TITLE_REGEX
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|title| {
            let title = title.as_str().to_lowercase();
            BLOCK_PAGE_MARKERS.iter().any(|marker| title.contains(marker))
        })
        .unwrap_or(false)
}

/// 数据源专用的 HTTP 抓取器
///
/// 每个适配器持有自己的客户端和限流器，适配器之间不共享可变状态。
/// 限流器拒绝时立即返回 `RateLimited`，不会阻塞等待。
pub struct HttpFetcher {
    source: SourceKind,
    client: reqwest::Client,
    limiter: Option<DefaultDirectRateLimiter>,
    retry: RetryPolicy,
}

impl HttpFetcher {
    pub fn new(
        source: SourceKind,
        settings: &HttpSettings,
        requests_per_minute: Option<u32>,
    ) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/json;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .default_headers(headers)
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(|e| SourceError::Network(format!("failed to build HTTP client: {}", e)))?;

        let limiter = requests_per_minute
            .and_then(NonZeroU32::new)
            .map(|rpm| RateLimiter::direct(Quota::per_minute(rpm)));

        Ok(Self {
            source,
            client,
            limiter,
            retry: RetryPolicy::new(
                settings.max_retries,
                Duration::from_millis(settings.initial_backoff_ms),
            ),
        })
    }

    /// 获取页面文本，瞬时错误按重试策略重试
    pub async fn fetch_text(&self, url: &Url) -> Result<String, SourceError> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(failure) if failure.retryable && self.retry.should_retry(attempt) => {
                    attempt += 1;
                    let backoff = self.retry.calculate_backoff(attempt);
                    debug!(
                        source = self.source.name(),
                        attempt,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %failure.error,
                        "Retrying job source request"
                    );
                    tokio::time::sleep(backoff).await;
                }
                Err(failure) => return Err(failure.error),
            }
        }
    }

    /// 获取并解析 JSON
    pub async fn fetch_json(&self, url: &Url) -> Result<serde_json::Value, SourceError> {
        let body = self.fetch_text(url).await?;
        serde_json::from_str(&body)
            .map_err(|e| SourceError::Parse(format!("invalid JSON response: {}", e)))
    }

    async fn fetch_once(&self, url: &Url) -> Result<String, AttemptFailure> {
        if let Some(limiter) = &self.limiter {
            if limiter.check().is_err() {
                return Err(AttemptFailure::fatal(SourceError::RateLimited));
            }
        }

        debug!(source = self.source.name(), %url, "Fetching job listings");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AttemptFailure::fatal(SourceError::RateLimited));
        }

        let body = response.text().await?;

        if is_blocked_page(&body) {
            return Err(AttemptFailure::fatal(SourceError::RateLimited));
        }
        if status.is_server_error() {
            return Err(AttemptFailure::transient(SourceError::Network(format!(
                "HTTP {}",
                status
            ))));
        }
        if !status.is_success() {
            return Err(AttemptFailure::fatal(SourceError::Network(format!(
                "HTTP {}",
                status
            ))));
        }

        Ok(body)
    }
}
