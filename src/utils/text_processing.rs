// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 文本清洗模块
//!
//! 各数据源返回的文本质量参差不齐，这里集中处理：
//! - HTML 标签剥离与实体解码
//! - 空白字符折叠
//! - 变音符号折叠与小写化，用于比较和分词
//! - 按字符边界截断

use once_cell::sync::Lazy;
use regex::Regex;

static HTML_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<[^>]+>").expect("Failed to compile HTML tag regex")
});

static BLOCK_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)</?(br|p|div|li|ul|ol|h[1-6]|tr)\b[^>]*>")
        .expect("Failed to compile block tag regex")
});

static SCRIPT_STYLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(script|style)[^>]*>.*?</(script|style)>")
        .expect("Failed to compile script/style regex")
});

/// 常见的无意义分词
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "at", "for", "in", "of", "on", "or", "the", "to", "with", "-", "&",
];

/// 折叠连续空白为单个空格并去掉首尾空白
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 剥离 HTML 标签并解码 HTML 实体
///
/// 块级标签会被替换为空格，避免相邻段落的单词粘连
///
/// # Examples
/// * `<p>Hello <strong>world</strong></p>` → `Hello world`
/// * `Test &amp; example` → `Test & example`
pub fn clean_html_text(html: &str) -> String {
    let without_scripts = SCRIPT_STYLE_REGEX.replace_all(html, " ");
    let spaced = BLOCK_TAG_REGEX.replace_all(&without_scripts, " ");
    let stripped = HTML_TAG_REGEX.replace_all(&spaced, "");
    let decoded = html_escape::decode_html_entities(&stripped);
    normalize_whitespace(&decoded)
}

/// 小写化并折叠变音符号（`Zürich` → `zurich`），用于比较键
pub fn fold_text(text: &str) -> String {
    deunicode::deunicode(text).to_lowercase()
}

/// 生成比较用的键：折叠 + 空白归一化
pub fn comparison_key(text: &str) -> String {
    normalize_whitespace(&fold_text(text))
}

/// 将文本切分为小写分词，去掉标点和停用词
pub fn tokenize(text: &str) -> Vec<String> {
    fold_text(text)
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '+' || c == '#'))
        .filter(|token| !token.is_empty())
        .filter(|token| !STOPWORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// 按字符数截断，不会截断在多字节字符中间
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].trim_end().to_string(),
        None => text.to_string(),
    }
}
