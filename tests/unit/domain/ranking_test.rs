// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use jobmatch::domain::models::job_posting::JobPosting;
    use jobmatch::domain::models::resume::ResumeRecord;
    use jobmatch::domain::services::deduplicator::JobDeduplicator;
    use jobmatch::domain::services::job_matcher::{calculate_match_percentage, JobMatcher};
    use jobmatch::domain::services::skill_extractor::extract_skills;
    use jobmatch::domain::sources::SourceKind;

    fn job(source: SourceKind, title: &str, company: &str, description: &str, url: &str) -> JobPosting {
        let mut job = JobPosting::new(source, title, company, "Pune", url).with_description(description);
        job.skills_mentioned = extract_skills(&format!("{} {}", title, description));
        job
    }

    fn data_engineer() -> ResumeRecord {
        ResumeRecord {
            skills: ["python", "SQL", "Apache Spark", "aws"].iter().map(|s| s.to_string()).collect(),
            years_experience: Some(3.0),
            titles: vec!["Data Engineer".to_string(), "Analyst".to_string()],
            ..ResumeRecord::default()
        }
    }

    #[test]
    fn test_dedup_then_rank() {
        let jobs = vec![
            job(SourceKind::Naukri, "Java Developer", "Wipro", "Java and Spring Boot", "https://naukri.test/1"),
            job(SourceKind::Naukri, "Data Engineer", "TCS", "Python, SQL and Spark on AWS", "https://naukri.test/2"),
            job(SourceKind::Shine, "Data Engineer", "TCS", "Python, SQL, Spark on AWS. 2-4 years experience.", "https://shine.test/9"),
            job(SourceKind::Foundit, "Data Analyst", "Infosys", "SQL and Excel", "https://foundit.test/3"),
        ];

        let unique = JobDeduplicator::new(vec!["utm_*".to_string()]).dedup(jobs);
        assert_eq!(unique.len(), 3);

        let ranked = JobMatcher::default().rank_jobs(&data_engineer(), unique);
        let titles: Vec<&str> = ranked.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Data Engineer", "Data Analyst", "Java Developer"]);

        // 合并后保留了描述更完整的 Shine 记录
        assert_eq!(ranked[0].source, SourceKind::Shine);
        assert!(ranked.iter().all(|j| j.match_percentage.is_some()));
    }

    #[test]
    fn test_free_function_matches_default_matcher() {
        let resume = data_engineer();
        let posting = job(SourceKind::Dice, "Senior Data Engineer", "Acme", "Spark and Kafka", "https://dice.test/1");

        let score = calculate_match_percentage(&resume, &posting);
        assert_eq!(score, JobMatcher::default().calculate_match_percentage(&resume, &posting));
        assert!((0.0..=100.0).contains(&score));

        let breakdown = JobMatcher::default().breakdown(&resume, &posting);
        assert_eq!(breakdown.matched_skills, vec!["spark".to_string()]);
        assert_eq!(breakdown.missing_skills, vec!["kafka".to_string()]);
    }
}
