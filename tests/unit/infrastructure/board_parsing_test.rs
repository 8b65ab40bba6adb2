// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use jobmatch::config::settings::{Settings, SourceSettings};
    use jobmatch::domain::models::job_posting::SalaryPeriod;
    use jobmatch::domain::sources::SourceKind;
    use jobmatch::infrastructure::sources::html_board::{HtmlBoardProfile, HtmlBoardSource};
    use jobmatch::infrastructure::sources::html_profiles::{LINKED_IN, NAUKRI, REED};

    fn board(profile: &'static HtmlBoardProfile) -> HtmlBoardSource {
        HtmlBoardSource::new(profile, &Settings::default().http, &SourceSettings::default()).unwrap()
    }

    #[test]
    fn test_linkedin_guest_listing() {
        let html = r#"
        <ul>
          <li>
            <div class="base-card base-search-card" data-entity-urn="urn:li:jobPosting:3791">
              <a class="base-card__full-link" href="https://www.linkedin.com/jobs/view/rust-engineer-3791?refId=abc&amp;trackingId=xyz">
                <span class="sr-only">Rust Engineer</span>
              </a>
              <div class="base-search-card__info">
                <h3 class="base-search-card__title">Rust Engineer</h3>
                <h4 class="base-search-card__subtitle"><a class="hidden-nested-link">Ferrous Systems</a></h4>
                <span class="job-search-card__location">Berlin, Germany</span>
                <time class="job-search-card__listdate" datetime="2024-01-15">2 weeks ago</time>
              </div>
            </div>
          </li>
        </ul>
        "#;

        let jobs = board(&LINKED_IN).parse_listings(html).unwrap();

        assert_eq!(jobs.len(), 1);
        let job = &jobs[0];
        assert_eq!(job.source, SourceKind::LinkedIn);
        assert_eq!(job.title, "Rust Engineer");
        assert_eq!(job.company, "Ferrous Systems");
        assert_eq!(job.location, "Berlin, Germany");
        assert_eq!(job.external_id, "urn:li:jobPosting:3791");
        assert!(job.url.starts_with("https://www.linkedin.com/jobs/view/rust-engineer-3791"));
        assert_eq!(
            job.posted_at.map(|d| d.format("%Y-%m-%d").to_string()).as_deref(),
            Some("2024-01-15")
        );
    }

    #[test]
    fn test_naukri_listing_with_lakh_salary() {
        let html = r#"
        <div class="srp-jobtuple-wrapper" data-job-id="150124">
          <div class="cust-job-tuple">
            <h2><a class="title" href="https://www.naukri.com/job-listings-rust-developer-infosys-pune-150124">Rust Developer</a></h2>
            <a class="comp-name">Infosys</a>
            <span class="locWdth">Pune, Bengaluru</span>
            <span class="sal-wrap"><span>5-8 Lacs PA</span></span>
            <span class="job-desc">Rust, AWS, Kubernetes and microservices</span>
          </div>
        </div>
        "#;

        let jobs = board(&NAUKRI).parse_listings(html).unwrap();

        assert_eq!(jobs.len(), 1);
        let job = &jobs[0];
        assert_eq!(job.external_id, "150124");
        assert_eq!(job.company, "Infosys");
        assert_eq!(job.location, "Pune, Bengaluru");

        let salary = job.salary_range.as_ref().unwrap();
        assert_eq!(salary.currency, "INR");
        assert_eq!((salary.min, salary.max), (500_000.0, 800_000.0));
        assert_eq!(salary.period, SalaryPeriod::Year);

        for skill in ["rust", "aws", "kubernetes"] {
            assert!(job.skills_mentioned.contains(skill), "missing {}", skill);
        }
    }

    #[test]
    fn test_reed_relative_links_and_pounds() {
        let html = r#"
        <article class="job-result" data-id="51234">
          <h2><a href="/jobs/backend-developer/51234">Backend Developer</a></h2>
          <div class="job-result-heading__posted-by"><a class="gtmJobListingPostedBy">Northwind</a></div>
          <ul>
            <li class="job-metadata__item--salary">£40k - £50k per annum</li>
            <li class="job-metadata__item--location">Manchester</li>
          </ul>
          <p class="job-result-description__details">Python &amp; Django on AWS</p>
        </article>
        "#;

        let jobs = board(&REED).parse_listings(html).unwrap();

        assert_eq!(jobs.len(), 1);
        let job = &jobs[0];
        assert_eq!(job.url, "https://www.reed.co.uk/jobs/backend-developer/51234");
        assert_eq!(job.company, "Northwind");
        assert_eq!(job.location, "Manchester");
        assert_eq!(job.description, "Python & Django on AWS");
        assert_eq!(job.salary_range.as_ref().map(|s| s.currency.as_str()), Some("GBP"));
    }
}
