// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! HTML 招聘网站的选择器配置
//!
//! 站点页面结构经常变化，每个字段都给出多个候选选择器，按顺序尝试。

use crate::domain::sources::SourceKind;
use crate::infrastructure::sources::html_board::HtmlBoardProfile;
use crate::infrastructure::sources::search_url::{Pagination, SearchUrl};

pub static INDEED: HtmlBoardProfile = HtmlBoardProfile {
    kind: SourceKind::Indeed,
    base_url: "https://www.indeed.com",
    search: SearchUrl::Query {
        path: "/jobs",
        title_param: Some("q"),
        location_param: Some("l"),
        extra: &[("sort", "date")],
        pagination: Pagination::Offset {
            param: "start",
            per_page: 10,
        },
    },
    card: &["div.job_seen_beacon", "div.cardOutline", "a.tapItem"],
    title: &["h2.jobTitle span[title]", "h2.jobTitle a span", "h2.jobTitle"],
    link: &["h2.jobTitle a", "a.jcs-JobTitle"],
    company: &["[data-testid='company-name']", "span.companyName"],
    location: &["[data-testid='text-location']", "div.companyLocation"],
    summary: &["div.job-snippet", "[data-testid='jobsnippet_footer']"],
    salary: &["div.salary-snippet-container", "[data-testid='attribute_snippet_testid']"],
    posted: &["span.date", "[data-testid='myJobsStateDate']"],
    id_attributes: &["data-jk"],
    default_currency: "USD",
    default_max_pages: 2,
};

pub static LINKED_IN: HtmlBoardProfile = HtmlBoardProfile {
    kind: SourceKind::LinkedIn,
    base_url: "https://www.linkedin.com",
    search: SearchUrl::Query {
        path: "/jobs-guest/jobs/api/seeMoreJobPostings/search",
        title_param: Some("keywords"),
        location_param: Some("location"),
        extra: &[],
        pagination: Pagination::Offset {
            param: "start",
            per_page: 25,
        },
    },
    card: &["div.base-search-card", "div.base-card", "li"],
    title: &["h3.base-search-card__title", "span.sr-only"],
    link: &["a.base-card__full-link", "a.base-search-card--link"],
    company: &["h4.base-search-card__subtitle", "a.hidden-nested-link"],
    location: &["span.job-search-card__location"],
    summary: &["p.job-search-card__snippet"],
    salary: &["span.job-search-card__salary-info"],
    posted: &["time.job-search-card__listdate", "time.job-search-card__listdate--new", "time"],
    id_attributes: &["data-entity-urn", "data-id"],
    default_currency: "USD",
    default_max_pages: 2,
};

pub static NAUKRI: HtmlBoardProfile = HtmlBoardProfile {
    kind: SourceKind::Naukri,
    base_url: "https://www.naukri.com",
    search: SearchUrl::PathSlug {
        template: "/{title}-jobs-in-{location}",
        without_location: "/{title}-jobs",
        pagination: Pagination::PageNumber {
            param: "pageNo",
            first: 1,
        },
    },
    card: &["div.srp-jobtuple-wrapper", "article.jobTuple", "div.cust-job-tuple"],
    title: &["a.title", "h2 a"],
    link: &["a.title", "h2 a"],
    company: &["a.comp-name", "a.subTitle"],
    location: &["span.locWdth", "li.location span", "span.loc-wrap"],
    summary: &["span.job-desc", "div.job-description"],
    salary: &["span.sal-wrap span", "li.salary span"],
    posted: &["span.job-post-day", "span.fleft.postedDate"],
    id_attributes: &["data-job-id"],
    default_currency: "INR",
    default_max_pages: 1,
};

pub static GLASSDOOR: HtmlBoardProfile = HtmlBoardProfile {
    kind: SourceKind::Glassdoor,
    base_url: "https://www.glassdoor.com",
    search: SearchUrl::Query {
        path: "/Job/jobs.htm",
        title_param: Some("sc.keyword"),
        location_param: Some("locKeyword"),
        extra: &[],
        pagination: Pagination::Single,
    },
    card: &["li[data-test='jobListing']", "li.react-job-listing"],
    title: &["a[data-test='job-title']", "a.jobLink", "a[data-test='job-link']"],
    link: &["a[data-test='job-title']", "a[data-test='job-link']", "a.jobLink"],
    company: &["[class*='EmployerProfile_compactEmployerName']", "div.employerName"],
    location: &["[data-test='emp-location']", "div.location"],
    summary: &["[class*='JobCard_jobDescriptionSnippet']", "div.jobDescriptionSnippet"],
    salary: &["[data-test='detailSalary']", "span.salary-estimate"],
    posted: &["[data-test='job-age']", "div.listing-age"],
    id_attributes: &["data-jobid", "data-id"],
    default_currency: "USD",
    default_max_pages: 1,
};

pub static MONSTER: HtmlBoardProfile = HtmlBoardProfile {
    kind: SourceKind::Monster,
    base_url: "https://www.monster.com",
    search: SearchUrl::Query {
        path: "/jobs/search",
        title_param: Some("q"),
        location_param: Some("where"),
        extra: &[],
        pagination: Pagination::PageNumber {
            param: "page",
            first: 1,
        },
    },
    card: &["article[data-testid='svx_jobCard']", "div[data-testid='JobCard']", "section.card-content"],
    title: &["[data-testid='jobTitle']", "h2.title a", "h3"],
    link: &["a[data-testid='jobTitle']", "h2.title a", "a"],
    company: &["[data-testid='company']", "div.company span.name"],
    location: &["[data-testid='jobDetailLocation']", "div.location span.name"],
    summary: &["[data-testid='SingleDescription']", "p.summary"],
    salary: &["[data-testid='jobDetailSalary']"],
    posted: &["[data-testid='jobDetailDateRecency']", "time"],
    id_attributes: &["data-job-id", "data-jobid"],
    default_currency: "USD",
    default_max_pages: 1,
};

pub static SIMPLY_HIRED: HtmlBoardProfile = HtmlBoardProfile {
    kind: SourceKind::SimplyHired,
    base_url: "https://www.simplyhired.com",
    search: SearchUrl::Query {
        path: "/search",
        title_param: Some("q"),
        location_param: Some("l"),
        extra: &[],
        pagination: Pagination::Single,
    },
    card: &["div[data-testid='searchSerpJob']", "article.SerpJob"],
    title: &["[data-testid='searchSerpJobTitle']", "h3.jobposting-title"],
    link: &["a[data-testid='searchSerpJobTitle']", "h2 a", "a.SerpJob-link"],
    company: &["[data-testid='companyName']", "span.jobposting-company"],
    location: &["[data-testid='searchSerpJobLocation']", "span.jobposting-location"],
    summary: &["[data-testid='searchSerpJobSnippet']", "p.jobposting-snippet"],
    salary: &["[data-testid='searchSerpJobSalaryEst']", "div.jobposting-salary"],
    posted: &["[data-testid='searchSerpJobDateStamp']", "time"],
    id_attributes: &["data-jobkey"],
    default_currency: "USD",
    default_max_pages: 1,
};

pub static ZIP_RECRUITER: HtmlBoardProfile = HtmlBoardProfile {
    kind: SourceKind::ZipRecruiter,
    base_url: "https://www.ziprecruiter.com",
    search: SearchUrl::Query {
        path: "/jobs-search",
        title_param: Some("search"),
        location_param: Some("location"),
        extra: &[],
        pagination: Pagination::PageNumber {
            param: "page",
            first: 1,
        },
    },
    card: &["article.job_result", "div.job_content", "li.job-listing"],
    title: &["h2.title", "span.just_job_title", "a.job_link"],
    link: &["a.job_link", "h2 a"],
    company: &["a.t_org_link", "p.company_name", "a.company_name"],
    location: &["a.t_location_link", "p.location", "span.location"],
    summary: &["p.job_snippet", "div.job_snippet"],
    salary: &["p.perk_item", "span.salary"],
    posted: &["p.job_age", "span.posted_time"],
    id_attributes: &["data-job-id", "id"],
    default_currency: "USD",
    default_max_pages: 1,
};

pub static CAREER_BUILDER: HtmlBoardProfile = HtmlBoardProfile {
    kind: SourceKind::CareerBuilder,
    base_url: "https://www.careerbuilder.com",
    search: SearchUrl::Query {
        path: "/jobs",
        title_param: Some("keywords"),
        location_param: Some("location"),
        extra: &[],
        pagination: Pagination::PageNumber {
            param: "page_number",
            first: 1,
        },
    },
    card: &["li.data-results-content-parent", "div.data-results-content"],
    title: &["div.data-results-title", "h2.job-title"],
    link: &["a.data-results-content", "a.job-listing-item", "a"],
    company: &["div.data-details span:first-child"],
    location: &["div.data-details span:nth-child(2)"],
    summary: &["div.data-snapshot div.block"],
    salary: &["div.data-snapshot div.block.salary", "span.salary"],
    posted: &["div.data-results-publish-time", "span.posted"],
    id_attributes: &["data-job-did"],
    default_currency: "USD",
    default_max_pages: 1,
};

pub static DICE: HtmlBoardProfile = HtmlBoardProfile {
    kind: SourceKind::Dice,
    base_url: "https://www.dice.com",
    search: SearchUrl::Query {
        path: "/jobs",
        title_param: Some("q"),
        location_param: Some("location"),
        extra: &[],
        pagination: Pagination::PageNumber {
            param: "page",
            first: 1,
        },
    },
    card: &["div[data-testid='job-card']", "dhi-search-card", "div.card.search-card"],
    title: &["a[data-testid='job-search-job-detail-link']", "a.card-title-link"],
    link: &["a[data-testid='job-search-job-detail-link']", "a.card-title-link"],
    company: &["a[data-cy='search-result-company-name']", "span.company-name", "p.mb-0 a"],
    location: &["span[data-cy='search-result-location']", "span.search-result-location"],
    summary: &["div[data-cy='card-summary']", "div.card-description"],
    salary: &["span[data-cy='compensationText']", "span.salary"],
    posted: &["span[data-cy='card-posted-date']", "span.posted-date"],
    id_attributes: &["data-id", "data-job-guid"],
    default_currency: "USD",
    default_max_pages: 1,
};

pub static TIMES_JOBS: HtmlBoardProfile = HtmlBoardProfile {
    kind: SourceKind::TimesJobs,
    base_url: "https://www.timesjobs.com",
    search: SearchUrl::Query {
        path: "/candidate/job-search.html",
        title_param: Some("txtKeywords"),
        location_param: Some("txtLocation"),
        extra: &[("searchType", "personalizedSearch"), ("from", "submit")],
        pagination: Pagination::PageNumber {
            param: "sequence",
            first: 1,
        },
    },
    card: &["li.clearfix.job-bx", "li.job-bx"],
    title: &["h2 a", "header h2"],
    link: &["h2 a"],
    company: &["h3.joblist-comp-name"],
    location: &["ul.top-jd-dtl li span", "span.srp-zindex"],
    summary: &["ul.list-job-dtl li"],
    salary: &["ul.top-jd-dtl li.salary"],
    posted: &["span.sim-posted span", "span.sim-posted"],
    id_attributes: &["data-job-id"],
    default_currency: "INR",
    default_max_pages: 1,
};

pub static SHINE: HtmlBoardProfile = HtmlBoardProfile {
    kind: SourceKind::Shine,
    base_url: "https://www.shine.com",
    search: SearchUrl::PathSlug {
        template: "/job-search/{title}-jobs-in-{location}",
        without_location: "/job-search/{title}-jobs",
        pagination: Pagination::Single,
    },
    card: &["div[class*='jobCard_jobCard__']", "div.jobCard"],
    title: &["h2 a", "[class*='jobCard_pReplaceH2']"],
    link: &["h2 a", "a[href*='/jobs/']"],
    company: &["[class*='jobCard_jobCard_cName']", "span.jobCard_cName"],
    location: &["[class*='jobCard_locationIcon']", "[class*='jobCard_jobCard_lists_item'] div"],
    summary: &["[class*='jobCard_jobCard_jobDetail']"],
    salary: &["[class*='jobCard_jobIcon'] + span", "span.salary"],
    posted: &["[class*='jobCard_jobCard_features'] span"],
    id_attributes: &["data-job-id", "id"],
    default_currency: "INR",
    default_max_pages: 1,
};

pub static FOUNDIT: HtmlBoardProfile = HtmlBoardProfile {
    kind: SourceKind::Foundit,
    base_url: "https://www.foundit.in",
    search: SearchUrl::Query {
        path: "/srp/results",
        title_param: Some("query"),
        location_param: Some("locations"),
        extra: &[],
        pagination: Pagination::Offset {
            param: "start",
            per_page: 15,
        },
    },
    card: &["div.srpResultCardContainer", "div.cardContainer"],
    title: &["div.jobTitle a", "div.jobTitle", "h3.jobTitle"],
    link: &["div.jobTitle a", "a[href*='/job/']"],
    company: &["div.companyName p", "div.companyName"],
    location: &["div.details.location", "div.location"],
    summary: &["div.jobDescription", "p.jobDesc"],
    salary: &["div.details.salary", "div.salary"],
    posted: &["p.timeText", "span.timeText"],
    id_attributes: &["data-job-id", "id"],
    default_currency: "INR",
    default_max_pages: 1,
};

pub static JOOBLE: HtmlBoardProfile = HtmlBoardProfile {
    kind: SourceKind::Jooble,
    base_url: "https://jooble.org",
    search: SearchUrl::Query {
        path: "/SearchResult",
        title_param: Some("ukw"),
        location_param: Some("rgns"),
        extra: &[],
        pagination: Pagination::PageNumber {
            param: "p",
            first: 1,
        },
    },
    card: &["article[data-test-name='_jobCard']", "article"],
    title: &["h2 a", "a[href*='/desc/']"],
    link: &["h2 a", "a[href*='/desc/']"],
    company: &["[data-test-name='_companyName']", "p[class*='companyName']"],
    location: &["[data-test-name='_jobLocation']", "div.caption"],
    summary: &["[data-test-name='_jobDescription']", "div[class*='desc']"],
    salary: &["[data-test-name='_salary']", "p[class*='salary']"],
    posted: &["[data-test-name='_dateInfo']", "div[class*='date']"],
    id_attributes: &["id", "data-id"],
    default_currency: "USD",
    default_max_pages: 1,
};

pub static REED: HtmlBoardProfile = HtmlBoardProfile {
    kind: SourceKind::Reed,
    base_url: "https://www.reed.co.uk",
    search: SearchUrl::PathSlug {
        template: "/jobs/{title}-jobs-in-{location}",
        without_location: "/jobs/{title}-jobs",
        pagination: Pagination::PageNumber {
            param: "pageno",
            first: 1,
        },
    },
    card: &["article[data-qa='job-card']", "article.job-result"],
    title: &["[data-qa='job-card-title']", "h2 a", "h3.title a"],
    link: &["a[data-qa='job-card-title']", "h2 a", "h3.title a"],
    company: &["[data-qa='job-posted-by'] a", "a.gtmJobListingPostedBy"],
    location: &["[data-qa='job-metadata-location']", "li.job-metadata__item--location"],
    summary: &["[data-qa='job-card-description']", "p.job-result-description__details"],
    salary: &["[data-qa='job-metadata-salary']", "li.job-metadata__item--salary"],
    posted: &["[data-qa='job-posted-by']", "div.job-result-heading__posted-by"],
    id_attributes: &["data-id"],
    default_currency: "GBP",
    default_max_pages: 1,
};

pub static TOTALJOBS: HtmlBoardProfile = HtmlBoardProfile {
    kind: SourceKind::Totaljobs,
    base_url: "https://www.totaljobs.com",
    search: SearchUrl::PathSlug {
        template: "/jobs/{title}/in-{location}",
        without_location: "/jobs/{title}",
        pagination: Pagination::PageNumber {
            param: "page",
            first: 1,
        },
    },
    card: &["article[data-at='job-item']", "div.job"],
    title: &["[data-at='job-item-title']", "h2 a"],
    link: &["a[data-at='job-item-title']", "h2 a"],
    company: &["[data-at='job-item-company-name']", "li.company"],
    location: &["[data-at='job-item-location']", "li.location"],
    summary: &["[data-at='jobcard-content']", "p.job-intro"],
    salary: &["[data-at='job-item-salary-info']", "li.salary"],
    posted: &["[data-at='job-item-timeago']", "time"],
    id_attributes: &["id", "data-job-id"],
    default_currency: "GBP",
    default_max_pages: 1,
};

pub static INTERNSHALA: HtmlBoardProfile = HtmlBoardProfile {
    kind: SourceKind::Internshala,
    base_url: "https://internshala.com",
    search: SearchUrl::PathSlug {
        template: "/jobs/{title}-jobs-in-{location}",
        without_location: "/jobs/{title}-jobs",
        pagination: Pagination::Single,
    },
    card: &["div.individual_internship", "div.internship_meta"],
    title: &["h3.job-internship-name a", "a.job-title-href", "h3.heading_4_5 a"],
    link: &["a.job-title-href", "h3.job-internship-name a", "h3.heading_4_5 a"],
    company: &["p.company-name", "a.link_display_like_text"],
    location: &["div.locations a", "p.locations a", "div.location_link a"],
    summary: &["div.about_job div.text", "div.internship_other_details_container"],
    salary: &["span.desktop", "span.stipend"],
    posted: &["div.status-success span", "div.status-inactive span", "div.status span"],
    id_attributes: &["internshipid", "data-internship_id"],
    default_currency: "INR",
    default_max_pages: 1,
};

pub static SEEK: HtmlBoardProfile = HtmlBoardProfile {
    kind: SourceKind::Seek,
    base_url: "https://www.seek.com.au",
    search: SearchUrl::PathSlug {
        template: "/{title}-jobs/in-{location}",
        without_location: "/{title}-jobs",
        pagination: Pagination::PageNumber {
            param: "page",
            first: 1,
        },
    },
    card: &["article[data-card-type='JobCard']", "article[data-automation='normalJob']"],
    title: &["a[data-automation='jobTitle']", "h3 a"],
    link: &["a[data-automation='jobTitle']", "h3 a"],
    company: &["[data-automation='jobCompany']", "a[data-automation='jobCompany']"],
    location: &["[data-automation='jobLocation']", "a[data-automation='jobLocation']"],
    summary: &["[data-automation='jobShortDescription']", "ul li"],
    salary: &["[data-automation='jobSalary']"],
    posted: &["[data-automation='jobListingDate']", "time"],
    id_attributes: &["data-job-id"],
    default_currency: "AUD",
    default_max_pages: 1,
};

/// 所有 HTML 招聘网站，按来源优先级排列
pub static HTML_BOARDS: [&HtmlBoardProfile; 17] = [
    &INDEED,
    &LINKED_IN,
    &NAUKRI,
    &GLASSDOOR,
    &MONSTER,
    &SIMPLY_HIRED,
    &ZIP_RECRUITER,
    &CAREER_BUILDER,
    &DICE,
    &TIMES_JOBS,
    &SHINE,
    &FOUNDIT,
    &JOOBLE,
    &REED,
    &TOTALJOBS,
    &INTERNSHALA,
    &SEEK,
];

/// 按来源查找 HTML 站点配置
pub fn html_profile(kind: SourceKind) -> Option<&'static HtmlBoardProfile> {
    HTML_BOARDS.iter().copied().find(|profile| profile.kind == kind)
}
