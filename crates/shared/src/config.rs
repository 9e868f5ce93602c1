//! 配置管理模块
//!
//! 从 JSON 配置文件加载参考数据与运行参数，支持环境变量覆盖，并在加载时完成校验。
//!
//! 配置文件顶层沿用大写键名（`SELLERS`、`MCC_DICT` 等），可选分组（`generation`、
//! `output`、`observability`、`mongo`）使用小写键名，便于通过环境变量覆盖。

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::Result;

/// 环境变量前缀：`TXSEED__MONGO__URI` -> `mongo.uri`
pub const ENV_PREFIX: &str = "TXSEED";

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// MCC 条目
///
/// 商户类别码及其可读的类别名称
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MccEntry {
    pub mcc: i64,
    #[validate(length(min = 1, message = "MCC 类别名称不能为空"))]
    pub category: String,
}

/// 交易时间回溯天数上限（约 100 年）
pub const MAX_TRANSACTION_WINDOW_DAYS: i64 = 36_500;

/// 生成参数
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct GenerationConfig {
    /// 工作线程数，未设置时使用 CPU 核数
    #[validate(range(min = 1, message = "工作线程数至少为 1"))]
    pub workers: Option<usize>,
    /// 交易时间的回溯天数
    #[validate(range(
        min = 0,
        max = MAX_TRANSACTION_WINDOW_DAYS,
        message = "回溯天数需在 0 到 36500 之间"
    ))]
    pub transaction_window_days: i64,
    /// 每个用户的最大交易数（含）
    pub max_transactions_per_user: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            workers: None,
            transaction_window_days: 60,
            max_transactions_per_user: 4,
        }
    }
}

/// JSON 文件输出配置
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct OutputConfig {
    #[validate(length(min = 1, message = "输出目录不能为空"))]
    pub directory: String,
    pub default_filename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "output_json".to_string(),
            default_filename: "users.json".to_string(),
        }
    }
}

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// 日志输出格式：json（结构化）或 pretty（人类可读）
    pub log_format: String,
    /// 日志文件路径，为空时输出到 stderr
    pub log_file: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            log_file: Some("app.log".to_string()),
        }
    }
}

/// MongoDB 连接参数
///
/// 库名与集合名来自顶层的 `MONGO_DATABASE` / `MONGO_COLLECTION`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MongoConfig {
    /// 默认连接串，命令行 `--connection` 优先
    pub uri: Option<String>,
    pub connect_timeout_seconds: u64,
    pub app_name: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: None,
            connect_timeout_seconds: 10,
            app_name: "txseed".to_string(),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppConfig {
    #[serde(rename = "SELLERS", alias = "sellers")]
    #[validate(length(min = 1, message = "SELLERS 至少需要一个卖家"))]
    pub sellers: Vec<String>,

    #[serde(rename = "MCC_DICT", alias = "mcc_dict")]
    #[validate(length(min = 1, message = "MCC_DICT 至少需要一个条目"), nested)]
    pub mcc_dict: Vec<MccEntry>,

    #[serde(rename = "TRANSACTION_TYPES", alias = "transaction_types")]
    #[validate(length(min = 1, message = "TRANSACTION_TYPES 至少需要一个交易类型"))]
    pub transaction_types: Vec<String>,

    #[serde(rename = "MONGO_DATABASE", alias = "mongo_database")]
    #[validate(length(min = 1, message = "MONGO_DATABASE 不能为空"))]
    pub mongo_database: String,

    #[serde(rename = "MONGO_COLLECTION", alias = "mongo_collection")]
    #[validate(length(min = 1, message = "MONGO_COLLECTION 不能为空"))]
    pub mongo_collection: String,

    #[serde(default)]
    pub mongo: MongoConfig,

    #[serde(default)]
    #[validate(nested)]
    pub generation: GenerationConfig,

    #[serde(default)]
    #[validate(nested)]
    pub output: OutputConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. JSON 配置文件（必须存在）
    /// 2. 环境变量（TXSEED__ 前缀，如 TXSEED__MONGO__URI -> mongo.uri）
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let builder = Config::builder()
            .add_source(File::from(path).format(FileFormat::Json).required(true))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 字符串加载配置（不读取环境变量）
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = Config::builder()
            .add_source(File::from_str(content, FileFormat::Json))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 解析 MongoDB 连接串：显式传入的优先，其次使用配置
    pub fn mongo_uri<'a>(&'a self, explicit: Option<&'a str>) -> Option<&'a str> {
        explicit
            .filter(|s| !s.trim().is_empty())
            .or(self.mongo.uri.as_deref())
    }
}
