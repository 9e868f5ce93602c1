//! 统一错误处理模块
//!
//! 定义数据生成、落盘和入库过程中共享的错误类型，使用 thiserror 提供可读的错误信息。

use thiserror::Error;

/// 系统错误类型
#[derive(Debug, Error)]
pub enum SeedError {
    // ==================== 配置错误 ====================
    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),

    #[error("配置校验失败: {0}")]
    Validation(String),

    // ==================== 生成错误 ====================
    #[error("参考数据为空: {list}")]
    EmptyReferenceData { list: &'static str },

    #[error("工作线程池创建失败: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("生成任务中断: 已完成 {completed}/{total}")]
    WorkerDisconnected { completed: usize, total: usize },

    // ==================== 输出错误 ====================
    #[error("文件写入失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),

    // ==================== MongoDB 错误 ====================
    #[error("MongoDB 连接失败: {0}")]
    Connection(#[source] mongodb::error::Error),

    #[error("MongoDB 批量写入失败: {0}")]
    Insert(#[source] mongodb::error::Error),

    // ==================== 输入错误 ====================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==================== 通用错误 ====================
    #[error("内部错误: {0}")]
    Internal(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, SeedError>;

impl From<validator::ValidationErrors> for SeedError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl SeedError {
    /// 是否为 MongoDB 相关错误
    pub fn is_store_error(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Insert(_))
    }
}
