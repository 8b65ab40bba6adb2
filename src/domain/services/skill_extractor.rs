// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::text_processing::{fold_text, normalize_whitespace};
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap, HashSet};

/// 技能词表：规范名称 -> 文本中可识别的写法
///
/// 规范名称本身不一定可被识别，例如 `go`、`rest` 在普通英文里太常见，
/// 只通过 `golang`、`restful` 这类无歧义写法识别。
const SKILL_VOCABULARY: &[(&str, &[&str])] = &[
    // Languages
    ("python", &["python", "python3"]),
    ("java", &["java"]),
    ("javascript", &["javascript", "js", "ecmascript"]),
    ("typescript", &["typescript"]),
    ("c++", &["c++", "cpp"]),
    ("c#", &["c#", "csharp"]),
    ("go", &["golang"]),
    ("rust", &["rust"]),
    ("ruby", &["ruby"]),
    ("php", &["php"]),
    ("kotlin", &["kotlin"]),
    ("swift", &["swift"]),
    ("scala", &["scala"]),
    ("perl", &["perl"]),
    ("dart", &["dart"]),
    ("elixir", &["elixir"]),
    ("haskell", &["haskell"]),
    ("bash", &["bash", "shell scripting"]),
    // Data stores
    ("sql", &["sql"]),
    ("nosql", &["nosql"]),
    ("mysql", &["mysql"]),
    ("postgresql", &["postgresql", "postgres", "psql"]),
    ("mongodb", &["mongodb", "mongo"]),
    ("redis", &["redis"]),
    ("elasticsearch", &["elasticsearch", "elastic search"]),
    ("cassandra", &["cassandra"]),
    ("oracle", &["oracle"]),
    ("sqlite", &["sqlite"]),
    ("dynamodb", &["dynamodb"]),
    ("snowflake", &["snowflake"]),
    // Web
    ("react", &["react", "reactjs", "react.js"]),
    ("react native", &["react native"]),
    ("angular", &["angular", "angularjs"]),
    ("vue", &["vue", "vuejs", "vue.js"]),
    ("node.js", &["node.js", "nodejs"]),
    ("next.js", &["next.js", "nextjs"]),
    ("django", &["django"]),
    ("flask", &["flask"]),
    ("fastapi", &["fastapi"]),
    ("spring", &["spring framework"]),
    ("spring boot", &["spring boot", "springboot"]),
    ("rails", &["rails", "ruby on rails"]),
    ("laravel", &["laravel"]),
    (".net", &[".net", "dotnet", "asp.net"]),
    ("graphql", &["graphql"]),
    ("rest", &["restful", "rest api", "rest apis"]),
    ("grpc", &["grpc"]),
    ("html", &["html", "html5"]),
    ("css", &["css", "css3"]),
    ("sass", &["sass", "scss"]),
    ("tailwind", &["tailwind", "tailwindcss"]),
    ("jquery", &["jquery"]),
    ("redux", &["redux"]),
    // Cloud and infrastructure
    ("aws", &["aws", "amazon web services"]),
    ("azure", &["azure"]),
    ("gcp", &["gcp", "google cloud", "google cloud platform"]),
    ("docker", &["docker"]),
    ("kubernetes", &["kubernetes", "k8s"]),
    ("terraform", &["terraform"]),
    ("ansible", &["ansible"]),
    ("jenkins", &["jenkins"]),
    ("ci/cd", &["ci cd", "cicd"]),
    ("git", &["git"]),
    ("linux", &["linux"]),
    ("kafka", &["kafka"]),
    ("rabbitmq", &["rabbitmq"]),
    ("microservices", &["microservices", "microservice"]),
    // Data and ML
    ("spark", &["spark", "apache spark", "pyspark"]),
    ("hadoop", &["hadoop"]),
    ("airflow", &["airflow"]),
    ("tableau", &["tableau"]),
    ("power bi", &["power bi", "powerbi"]),
    ("excel", &["excel"]),
    ("machine learning", &["machine learning", "ml"]),
    ("deep learning", &["deep learning"]),
    ("nlp", &["nlp", "natural language processing"]),
    ("computer vision", &["computer vision"]),
    ("tensorflow", &["tensorflow"]),
    ("pytorch", &["pytorch"]),
    ("scikit-learn", &["scikit learn", "sklearn"]),
    ("pandas", &["pandas"]),
    ("numpy", &["numpy"]),
    ("data analysis", &["data analysis", "data analytics"]),
    ("data science", &["data science"]),
    ("statistics", &["statistics"]),
    ("llm", &["llm", "llms", "large language models"]),
    // Practice and tooling
    ("agile", &["agile"]),
    ("scrum", &["scrum"]),
    ("jira", &["jira"]),
    ("figma", &["figma"]),
    ("selenium", &["selenium"]),
    ("cypress", &["cypress"]),
    ("jest", &["jest"]),
    ("junit", &["junit"]),
    // Mobile
    ("android", &["android"]),
    ("ios", &["ios"]),
    ("flutter", &["flutter"]),
];

/// 识别写法 -> 规范名称
static ALIAS_INDEX: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    SKILL_VOCABULARY
        .iter()
        .flat_map(|(canonical, aliases)| aliases.iter().map(move |alias| (*alias, *canonical)))
        .collect()
});

/// 规范名称集合
static CANONICAL: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SKILL_VOCABULARY.iter().map(|(canonical, _)| *canonical).collect());

const MAX_PHRASE_WORDS: usize = 3;

/// 技能分词：保留 `+`、`#`、`.` 以识别 `c++`、`c#`、`node.js`、`.net`
fn skill_tokens(text: &str) -> Vec<String> {
    fold_text(text)
        .split(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '+' | '#' | '.')))
        .map(|token| {
            let token = token.trim_end_matches('.');
            if token == ".net" {
                token
            } else {
                token.trim_start_matches('.')
            }
        })
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// 从职位标题和描述中提取规范化的技能集合
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    let tokens = skill_tokens(text);
    let mut skills = BTreeSet::new();

    for start in 0..tokens.len() {
        for width in 1..=MAX_PHRASE_WORDS {
            let Some(window) = tokens.get(start..start + width) else {
                break;
            };
            let phrase = window.join(" ");
            if let Some(canonical) = ALIAS_INDEX.get(phrase.as_str()) {
                skills.insert((*canonical).to_string());
            }
        }
    }

    skills
}

/// 若文本是词表中的技能（规范名或任一写法），返回规范名称
pub fn canonical_skill(raw: &str) -> Option<String> {
    let key = normalize_whitespace(&fold_text(raw));
    if CANONICAL.contains(key.as_str()) {
        return Some(key);
    }
    if let Some(canonical) = ALIAS_INDEX.get(key.as_str()) {
        return Some((*canonical).to_string());
    }
    let joined = skill_tokens(&key).join(" ");
    ALIAS_INDEX.get(joined.as_str()).map(|c| (*c).to_string())
}

/// 归一化任意技能写法：词表内的映射到规范名称，其余折叠为小写文本
///
/// 简历中的技能和职位中的技能都经过这里，保证两边可以直接求交集
pub fn normalize_skill(raw: &str) -> String {
    canonical_skill(raw).unwrap_or_else(|| normalize_whitespace(&fold_text(raw)))
}
