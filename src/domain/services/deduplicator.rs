// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_posting::JobPosting;
use crate::utils::text_processing::comparison_key;
use crate::utils::url_utils::normalize_job_url;
use std::collections::HashMap;

/// 去重键
///
/// 两条职位共享任意一个键即视为重复
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum DedupKey {
    /// 归一化后的 URL
    Url(String),
    /// 归一化后的 (标题, 公司, 地点)
    Listing(String, String, String),
}

/// 并查集，用于把通过不同键相连的职位合并为同一组
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    /// 合并两个集合，根总是取较小的下标，保证组按最早成员定位
    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            let (root, child) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[child] = root;
        }
    }
}

/// 职位去重器
///
/// 规则：
/// - URL 归一化后相同（忽略跟踪参数、片段、末尾斜杠）
/// - 或者标题、公司、地点在大小写、空白和变音符号归一化后完全相同
///
/// 重复关系按传递闭包合并，因此 `dedup(dedup(x)) == dedup(x)`
#[derive(Debug, Clone)]
pub struct JobDeduplicator {
    tracking_params: Vec<String>,
}

impl JobDeduplicator {
    /// 创建去重器，`tracking_params` 为 URL 归一化时剔除的查询参数
    pub fn new(tracking_params: Vec<String>) -> Self {
        Self { tracking_params }
    }

    fn keys(&self, job: &JobPosting) -> Vec<DedupKey> {
        let mut keys = Vec::with_capacity(2);

        if !job.url.trim().is_empty() {
            keys.push(DedupKey::Url(normalize_job_url(
                &job.url,
                &self.tracking_params,
            )));
        }

        let title = comparison_key(&job.title);
        let company = comparison_key(&job.company);
        if !title.is_empty() && !company.is_empty() {
            keys.push(DedupKey::Listing(
                title,
                company,
                comparison_key(&job.location),
            ));
        }

        keys
    }

    /// 去除重复职位，保留首次出现的顺序
    ///
    /// 每组重复项合并为一条：保留描述最丰富的那条（相同时取最早出现的），
    /// 技能取并集，缺失的发布时间、薪资和外部 ID 从同组其他记录补齐
    pub fn dedup(&self, jobs: Vec<JobPosting>) -> Vec<JobPosting> {
        if jobs.len() < 2 {
            return jobs;
        }

        let mut groups = DisjointSet::new(jobs.len());
        let mut first_owner: HashMap<DedupKey, usize> = HashMap::new();

        for (index, job) in jobs.iter().enumerate() {
            for key in self.keys(job) {
                match first_owner.get(&key) {
                    Some(&owner) => groups.union(owner, index),
                    None => {
                        first_owner.insert(key, index);
                    }
                }
            }
        }

        // 按根节点收集成员，根是组内最小下标，因此按根排序即为首次出现顺序
        let mut members: Vec<Vec<usize>> = vec![Vec::new(); jobs.len()];
        for index in 0..jobs.len() {
            let root = groups.find(index);
            members[root].push(index);
        }

        let mut slots: Vec<Option<JobPosting>> = jobs.into_iter().map(Some).collect();
        let mut deduplicated = Vec::new();

        for group in members.into_iter().filter(|group| !group.is_empty()) {
            let postings: Vec<JobPosting> = group
                .iter()
                .filter_map(|&index| slots[index].take())
                .collect();
            if let Some(merged) = merge_group(postings) {
                deduplicated.push(merged);
            }
        }

        deduplicated
    }
}

/// 合并同一组中的职位，`postings` 按出现顺序排列
fn merge_group(postings: Vec<JobPosting>) -> Option<JobPosting> {
    let survivor_index = postings
        .iter()
        .enumerate()
        .fold(None::<(usize, usize)>, |best, (index, job)| {
            let richness = job.description_richness();
            match best {
                Some((_, best_richness)) if best_richness >= richness => best,
                _ => Some((index, richness)),
            }
        })
        .map(|(index, _)| index)?;

    let mut others = postings;
    let mut survivor = others.remove(survivor_index);

    for other in others {
        survivor.skills_mentioned.extend(other.skills_mentioned);
        if survivor.posted_at.is_none() {
            survivor.posted_at = other.posted_at;
        }
        if survivor.salary_range.is_none() {
            survivor.salary_range = other.salary_range;
        }
        if survivor.external_id.is_empty() {
            survivor.external_id = other.external_id;
        }
    }

    Some(survivor)
}
