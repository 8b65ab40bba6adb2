// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::sources::SourceKind;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// 配置错误
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// 应用程序配置设置
///
/// 包含聚合器、HTTP、匹配、去重、数据源、日志和指标等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 聚合器配置
    pub aggregator: AggregatorSettings,
    /// HTTP 客户端配置
    pub http: HttpSettings,
    /// 简历匹配配置
    pub matching: MatchingSettings,
    /// 去重配置
    pub dedup: DedupSettings,
    /// 各数据源的覆盖配置，键为数据源名称（如 `indeed`、`remote_ok`）
    #[serde(default)]
    pub sources: HashMap<String, SourceSettings>,
    /// 日志配置
    pub logging: LoggingSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 聚合器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct AggregatorSettings {
    /// 整体超时时间（毫秒），聚合器从不阻塞调用方超过此时间
    pub overall_timeout_ms: u64,
    /// 单个数据源超时时间（毫秒）
    pub source_timeout_ms: u64,
    /// 每个数据源最多保留的职位数
    pub max_jobs_per_source: usize,
}

/// HTTP 客户端配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// 请求使用的 User-Agent
    pub user_agent: String,
    /// 单次请求超时时间（毫秒）
    pub request_timeout_ms: u64,
    /// 瞬时错误的最大重试次数
    pub max_retries: u32,
    /// 初始退避时间（毫秒）
    pub initial_backoff_ms: u64,
    /// 职位描述保留的最大字符数
    pub max_description_chars: usize,
}

/// 简历匹配配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// 技能重合度权重
    pub skill_weight: f64,
    /// 职位名称相似度权重
    pub title_weight: f64,
    /// 工作年限匹配权重
    pub experience_weight: f64,
    /// 超出年限区间后线性衰减到 0 所需的年数
    pub experience_decay_years: f64,
    /// 无法推断年限区间时的默认得分
    pub default_experience_score: f64,
}

/// 去重配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DedupSettings {
    /// 归一化 URL 时剔除的跟踪参数，支持 `utm_*` 形式的前缀匹配
    pub tracking_params: Vec<String>,
}

/// 单个数据源配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    /// 是否启用
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// 覆盖站点基础地址（测试时指向本地模拟服务）
    #[serde(default)]
    pub base_url: Option<String>,
    /// 每分钟最多请求数
    #[serde(default)]
    pub requests_per_minute: Option<u32>,
    /// 最多抓取的页数
    #[serde(default)]
    pub max_pages: Option<u32>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: None,
            requests_per_minute: None,
            max_pages: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` 过滤规则
    pub filter: String,
    /// 是否输出 JSON 格式日志
    pub json: bool,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// 导出监听地址
    pub listen_addr: String,
}

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const DEFAULT_TRACKING_PARAMS: &[&str] = &[
    "utm_*", "ref", "refid", "trk", "trackingid", "src", "source", "from", "fbclid", "gclid",
    "position", "pagenum", "searchid", "tk", "from_page",
];

impl Default for Settings {
    fn default() -> Self {
        Self {
            aggregator: AggregatorSettings {
                overall_timeout_ms: 12_000,
                source_timeout_ms: 8_000,
                max_jobs_per_source: 50,
            },
            http: HttpSettings {
                user_agent: DEFAULT_USER_AGENT.to_string(),
                request_timeout_ms: 6_000,
                max_retries: 1,
                initial_backoff_ms: 250,
                max_description_chars: 2_000,
            },
            matching: MatchingSettings {
                skill_weight: 0.60,
                title_weight: 0.25,
                experience_weight: 0.15,
                experience_decay_years: 5.0,
                default_experience_score: 0.5,
            },
            dedup: DedupSettings {
                tracking_params: DEFAULT_TRACKING_PARAMS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
            sources: HashMap::new(),
            logging: LoggingSettings {
                filter: "info,jobmatch=debug".to_string(),
                json: false,
            },
            metrics: MetricsSettings {
                enabled: false,
                listen_addr: "0.0.0.0:9000".to_string(),
            },
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加：代码内默认值、`config/default`、`config/{APP_ENVIRONMENT}`、
    /// 以 `JOBMATCH__` 为前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载并通过校验的配置
    /// * `Err(SettingsError)` - 配置加载或校验失败
    pub fn new() -> Result<Self, SettingsError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let defaults = Self::default();

        let builder = Config::builder()
            // Start with default settings
            .set_default("aggregator.overall_timeout_ms", defaults.aggregator.overall_timeout_ms)?
            .set_default("aggregator.source_timeout_ms", defaults.aggregator.source_timeout_ms)?
            .set_default(
                "aggregator.max_jobs_per_source",
                defaults.aggregator.max_jobs_per_source as u64,
            )?
            // Default HTTP settings
            .set_default("http.user_agent", defaults.http.user_agent.clone())?
            .set_default("http.request_timeout_ms", defaults.http.request_timeout_ms)?
            .set_default("http.max_retries", defaults.http.max_retries as u64)?
            .set_default("http.initial_backoff_ms", defaults.http.initial_backoff_ms)?
            .set_default(
                "http.max_description_chars",
                defaults.http.max_description_chars as u64,
            )?
            // Default matching settings
            .set_default("matching.skill_weight", defaults.matching.skill_weight)?
            .set_default("matching.title_weight", defaults.matching.title_weight)?
            .set_default("matching.experience_weight", defaults.matching.experience_weight)?
            .set_default(
                "matching.experience_decay_years",
                defaults.matching.experience_decay_years,
            )?
            .set_default(
                "matching.default_experience_score",
                defaults.matching.default_experience_score,
            )?
            // Default dedup settings
            .set_default("dedup.tracking_params", defaults.dedup.tracking_params.clone())?
            // Default logging and metrics settings
            .set_default("logging.filter", defaults.logging.filter.clone())?
            .set_default("logging.json", defaults.logging.json)?
            .set_default("metrics.enabled", defaults.metrics.enabled)?
            .set_default("metrics.listen_addr", defaults.metrics.listen_addr.clone())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("JOBMATCH").separator("__"));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// 校验配置的取值范围
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.aggregator.overall_timeout_ms == 0 {
            return Err(SettingsError::Invalid(
                "aggregator.overall_timeout_ms must be positive".to_string(),
            ));
        }
        if self.aggregator.source_timeout_ms == 0 {
            return Err(SettingsError::Invalid(
                "aggregator.source_timeout_ms must be positive".to_string(),
            ));
        }
        if self.http.request_timeout_ms == 0 {
            return Err(SettingsError::Invalid(
                "http.request_timeout_ms must be positive".to_string(),
            ));
        }

        let m = &self.matching;
        let weights = [m.skill_weight, m.title_weight, m.experience_weight];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(SettingsError::Invalid(
                "matching weights must be finite and non-negative".to_string(),
            ));
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(SettingsError::Invalid(
                "matching weights must not all be zero".to_string(),
            ));
        }
        if !(m.experience_decay_years.is_finite() && m.experience_decay_years > 0.0) {
            return Err(SettingsError::Invalid(
                "matching.experience_decay_years must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&m.default_experience_score) {
            return Err(SettingsError::Invalid(
                "matching.default_experience_score must be within [0, 1]".to_string(),
            ));
        }

        for name in self.sources.keys() {
            if name.parse::<SourceKind>().is_err() {
                return Err(SettingsError::Invalid(format!(
                    "unknown source in configuration: {}",
                    name
                )));
            }
        }

        Ok(())
    }

    /// 获取某个数据源的配置，未配置时返回默认值
    ///
    /// 键名按 `SourceKind` 的宽松解析匹配，`linkedin` 与 `linked_in` 等价
    pub fn source(&self, kind: SourceKind) -> SourceSettings {
        self.sources
            .iter()
            .find(|(key, _)| key.parse::<SourceKind>() == Ok(kind))
            .map(|(_, settings)| settings.clone())
            .unwrap_or_default()
    }
}
