// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_posting::{SalaryPeriod, SalaryRange};
use once_cell::sync::Lazy;
use regex::Regex;

static AMOUNT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+(?:,\d{3})*(?:\.\d+)?)\s*(k\b)?").expect("Failed to compile amount regex")
});

static LAKH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(lakh|lakhs|lac|lacs|lpa)\b").expect("Failed to compile lakh regex"));

/// 货币符号/代码到 ISO 代码的映射，按匹配优先级排列
const CURRENCY_MARKERS: &[(&str, &str)] = &[
    ("A$", "AUD"),
    ("AUD", "AUD"),
    ("C$", "CAD"),
    ("CAD", "CAD"),
    ("US$", "USD"),
    ("USD", "USD"),
    ("$", "USD"),
    ("£", "GBP"),
    ("GBP", "GBP"),
    ("€", "EUR"),
    ("EUR", "EUR"),
    ("₹", "INR"),
    ("INR", "INR"),
    ("Rs", "INR"),
];

fn detect_currency(text: &str, default_currency: &str) -> String {
    if LAKH_REGEX.is_match(text) {
        return "INR".to_string();
    }
    CURRENCY_MARKERS
        .iter()
        .find(|(marker, _)| text.contains(marker))
        .map(|(_, code)| code.to_string())
        .unwrap_or_else(|| default_currency.to_string())
}

fn detect_period(text: &str) -> SalaryPeriod {
    let lower = text.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

    if has(&["hour", "/hr", "hourly", "p.h"]) {
        SalaryPeriod::Hour
    } else if has(&["a day", "per day", "/day", "daily"]) {
        SalaryPeriod::Day
    } else if has(&["week", "/wk"]) {
        SalaryPeriod::Week
    } else if has(&["month", "/mo", "p.m."]) {
        SalaryPeriod::Month
    } else if has(&["year", "annum", "annual", "/yr", "p.a", " pa", "lpa", "lakh", "lac"]) {
        SalaryPeriod::Year
    } else {
        SalaryPeriod::Unknown
    }
}

/// 将职位卡片上的薪资文本解析为归一化的区间
///
/// 处理千分位、`k` 后缀、印度的 lakh 计数，以及 "From"/"Up to" 这类单边值。
/// 文本中找不到任何金额时返回 `None`。
///
/// # Examples
/// * `$80,000 - $120,000 a year` → 80000..120000 USD / Year
/// * `₹5-8 Lacs PA` → 500000..800000 INR / Year
pub fn parse_salary(text: &str, default_currency: &str) -> Option<SalaryRange> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let multiplier = if LAKH_REGEX.is_match(text) {
        100_000.0
    } else {
        1.0
    };

    let amounts: Vec<f64> = AMOUNT_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let raw = caps.get(1)?.as_str().replace(',', "");
            let value: f64 = raw.parse().ok()?;
            let value = if caps.get(2).is_some() {
                value * 1_000.0
            } else {
                value
            };
            Some(value * multiplier)
        })
        .filter(|value| value.is_finite() && *value > 0.0)
        .take(2)
        .collect();

    let (min, max) = match amounts.as_slice() {
        [] => return None,
        [only] => (*only, *only),
        [first, second, ..] => (*first, *second),
    };

    Some(SalaryRange::new(
        min,
        max,
        detect_currency(text, default_currency),
        detect_period(text),
    ))
}
