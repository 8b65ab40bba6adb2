// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 招聘网站适配器模块
///
/// HTML 站点通过 CSS 选择器配置解析，JSON 接口通过字段映射解析，
/// 两者共享同一个带限流和重试的 HTTP 抓取器
pub mod factory;
pub mod html_board;
pub mod html_profiles;
pub mod http_fetcher;
pub mod json_api;
pub mod json_profiles;
pub mod search_url;

pub use factory::{build_default_sources, build_source};
pub use html_board::{HtmlBoardProfile, HtmlBoardSource};
pub use http_fetcher::HttpFetcher;
pub use json_api::{JsonApiProfile, JsonApiSource};
