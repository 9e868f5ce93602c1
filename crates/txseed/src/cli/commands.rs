//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行参数。未提供 `--generate` 时进入交互式菜单。

use clap::{Parser, ValueEnum};

/// 用户与交易测试数据生成工具
///
/// 生成随机用户（内含交易记录），写入 MongoDB 或 JSON 文件。
/// 使用 `--help` 查看参数说明。
#[derive(Parser, Debug)]
#[command(name = "txseed")]
#[command(version, about = "用户与交易测试数据生成工具")]
pub struct Cli {
    /// 要生成的文档数量（不提供则进入交互式菜单）
    #[arg(long)]
    pub generate: Option<usize>,

    /// 输出目标
    #[arg(long, value_enum)]
    pub output: Option<OutputTarget>,

    /// MongoDB 连接串
    #[arg(long)]
    pub connection: Option<String>,

    /// JSON 文件名（无扩展名时自动补 .json）
    #[arg(long)]
    pub filename: Option<String>,

    /// 配置文件路径
    #[arg(short, long, default_value = txseed_shared::config::DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// JSON 输出目录（覆盖配置）
    #[arg(long)]
    pub output_dir: Option<String>,

    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

/// 输出目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputTarget {
    /// 写入 MongoDB
    Mongo,
    /// 写入 JSON 文件
    #[default]
    Json,
}

impl OutputTarget {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mongo => "mongo",
            Self::Json => "json",
        }
    }
}

// ============================================================================
// 单元测试
// ============================================================================
