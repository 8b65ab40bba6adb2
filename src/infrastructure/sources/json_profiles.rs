// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 公开 JSON 招聘接口的字段映射

use crate::domain::sources::SourceKind;
use crate::infrastructure::sources::json_api::{JsonApiProfile, JsonFieldMap};
use crate::infrastructure::sources::search_url::{Pagination, SearchUrl};

pub static REMOTIVE: JsonApiProfile = JsonApiProfile {
    kind: SourceKind::Remotive,
    base_url: "https://remotive.com",
    search: SearchUrl::Query {
        path: "/api/remote-jobs",
        title_param: Some("search"),
        location_param: None,
        extra: &[("limit", "50")],
        pagination: Pagination::Single,
    },
    items: "/jobs",
    fields: JsonFieldMap {
        id: &["/id"],
        title: &["/title"],
        company: &["/company_name"],
        location: &["/candidate_required_location"],
        description: &["/description"],
        url: &["/url"],
        posted: &["/publication_date"],
        salary_min: &[],
        salary_max: &[],
        salary_currency: &[],
        salary_text: &["/salary"],
        tags: &["/tags"],
    },
    filter_by_title: false,
    default_currency: "USD",
};

pub static ARBEITNOW: JsonApiProfile = JsonApiProfile {
    kind: SourceKind::Arbeitnow,
    base_url: "https://www.arbeitnow.com",
    search: SearchUrl::Query {
        path: "/api/job-board-api",
        title_param: None,
        location_param: None,
        extra: &[],
        pagination: Pagination::Single,
    },
    items: "/data",
    fields: JsonFieldMap {
        id: &["/slug"],
        title: &["/title"],
        company: &["/company_name"],
        location: &["/location"],
        description: &["/description"],
        url: &["/url"],
        posted: &["/created_at"],
        salary_min: &[],
        salary_max: &[],
        salary_currency: &[],
        salary_text: &[],
        tags: &["/tags"],
    },
    filter_by_title: true,
    default_currency: "EUR",
};

pub static THE_MUSE: JsonApiProfile = JsonApiProfile {
    kind: SourceKind::TheMuse,
    base_url: "https://www.themuse.com",
    search: SearchUrl::Query {
        path: "/api/public/jobs",
        title_param: None,
        location_param: Some("location"),
        extra: &[("page", "0"), ("descending", "true")],
        pagination: Pagination::Single,
    },
    items: "/results",
    fields: JsonFieldMap {
        id: &["/id"],
        title: &["/name"],
        company: &["/company/name"],
        location: &["/locations"],
        description: &["/contents"],
        url: &["/refs/landing_page"],
        posted: &["/publication_date"],
        salary_min: &[],
        salary_max: &[],
        salary_currency: &[],
        salary_text: &[],
        tags: &["/categories"],
    },
    filter_by_title: true,
    default_currency: "USD",
};

pub static REMOTE_OK: JsonApiProfile = JsonApiProfile {
    kind: SourceKind::RemoteOk,
    base_url: "https://remoteok.com",
    search: SearchUrl::Query {
        path: "/api",
        title_param: None,
        location_param: None,
        extra: &[],
        pagination: Pagination::Single,
    },
    items: "",
    fields: JsonFieldMap {
        id: &["/id"],
        title: &["/position"],
        company: &["/company"],
        location: &["/location"],
        description: &["/description"],
        url: &["/url", "/apply_url"],
        posted: &["/epoch", "/date"],
        salary_min: &["/salary_min"],
        salary_max: &["/salary_max"],
        salary_currency: &[],
        salary_text: &[],
        tags: &["/tags"],
    },
    filter_by_title: true,
    default_currency: "USD",
};

pub static JOBICY: JsonApiProfile = JsonApiProfile {
    kind: SourceKind::Jobicy,
    base_url: "https://jobicy.com",
    search: SearchUrl::Query {
        path: "/api/v2/remote-jobs",
        title_param: Some("tag"),
        location_param: None,
        extra: &[("count", "50")],
        pagination: Pagination::Single,
    },
    items: "/jobs",
    fields: JsonFieldMap {
        id: &["/id"],
        title: &["/jobTitle"],
        company: &["/companyName"],
        location: &["/jobGeo"],
        description: &["/jobDescription", "/jobExcerpt"],
        url: &["/url"],
        posted: &["/pubDate"],
        salary_min: &["/annualSalaryMin", "/salaryMin"],
        salary_max: &["/annualSalaryMax", "/salaryMax"],
        salary_currency: &["/salaryCurrency"],
        salary_text: &[],
        tags: &["/jobIndustry"],
    },
    filter_by_title: false,
    default_currency: "USD",
};

pub static HIMALAYAS: JsonApiProfile = JsonApiProfile {
    kind: SourceKind::Himalayas,
    base_url: "https://himalayas.app",
    search: SearchUrl::Query {
        path: "/jobs/api",
        title_param: None,
        location_param: None,
        extra: &[("limit", "50")],
        pagination: Pagination::Single,
    },
    items: "/jobs",
    fields: JsonFieldMap {
        id: &["/guid"],
        title: &["/title"],
        company: &["/companyName"],
        location: &["/locationRestrictions"],
        description: &["/description", "/excerpt"],
        url: &["/applicationLink", "/guid"],
        posted: &["/pubDate"],
        salary_min: &["/minSalary"],
        salary_max: &["/maxSalary"],
        salary_currency: &["/currency"],
        salary_text: &[],
        tags: &["/categories", "/skills"],
    },
    filter_by_title: true,
    default_currency: "USD",
};

/// 所有 JSON 招聘接口，按来源优先级排列
pub static JSON_APIS: [&JsonApiProfile; 6] =
    [&REMOTIVE, &ARBEITNOW, &THE_MUSE, &REMOTE_OK, &JOBICY, &HIMALAYAS];

/// 按来源查找 JSON 接口配置
pub fn json_profile(kind: SourceKind) -> Option<&'static JsonApiProfile> {
    JSON_APIS.iter().copied().find(|profile| profile.kind == kind)
}
