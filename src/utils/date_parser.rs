// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static RFC3339_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:\d{2})")
        .expect("Failed to compile RFC 3339 regex")
});

static ISO_DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("Failed to compile ISO date regex"));

static RELATIVE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*\+?\s*(minute|min|hour|hr|day|week|month|year)s?\s+ago")
        .expect("Failed to compile relative time regex")
});

static MONTH_DAY_YEAR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{1,2}),?\s+(\d{4})")
        .expect("Failed to compile month-day-year regex")
});

fn midnight_utc(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

fn month_number(abbrev: &str) -> Option<u32> {
    let month = match abbrev.to_ascii_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// 从职位卡片上的发布时间文本中解析出时间
///
/// 支持 RFC 3339、RFC 2822、`YYYY-MM-DD`、`Jan 15, 2024`，
/// 以及 "3 days ago"、"30+ days ago"、"today"、"yesterday" 等相对时间。
/// 相对时间以传入的 `now` 为基准，便于测试。
pub fn parse_posted_date(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(m) = RFC3339_REGEX.find(trimmed) {
        if let Ok(dt) = DateTime::parse_from_rfc3339(m.as_str()) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(m) = ISO_DATE_REGEX.find(trimmed) {
        if let Ok(date) = NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d") {
            return midnight_utc(date);
        }
    }

    if let Some(caps) = MONTH_DAY_YEAR_REGEX.captures(trimmed) {
        let month = month_number(&caps[1])?;
        let day: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day).and_then(midnight_utc);
    }

    if let Some(caps) = RELATIVE_REGEX.captures(trimmed) {
        // 超出范围的数值视为无法解析
        let amount: i64 = caps[1].parse().ok()?;
        let duration = match caps[2].to_ascii_lowercase().as_str() {
            "minute" | "min" => Duration::try_minutes(amount),
            "hour" | "hr" => Duration::try_hours(amount),
            "day" => Duration::try_days(amount),
            "week" => Duration::try_weeks(amount),
            "month" => amount.checked_mul(30).and_then(Duration::try_days),
            "year" => amount.checked_mul(365).and_then(Duration::try_days),
            _ => return None,
        }?;
        return now.checked_sub_signed(duration);
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower.contains("just posted")
        || lower.contains("just now")
        || lower.contains("today")
        || lower.contains("few hours ago")
    {
        return Some(now);
    }
    if lower.contains("yesterday") {
        return now.checked_sub_signed(Duration::days(1));
    }

    None
}

/// 解析 JSON 接口返回的 Unix 时间戳，毫秒级时间戳会被自动识别
pub fn from_unix_timestamp(value: i64) -> Option<DateTime<Utc>> {
    if value >= 1_000_000_000_000 {
        DateTime::from_timestamp_millis(value)
    } else {
        DateTime::from_timestamp(value, 0)
    }
}
