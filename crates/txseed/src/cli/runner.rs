//! 命令执行器
//!
//! 将命令行参数转化为对 `SeedService` 的调用，并输出执行结果。
//! 参数模式和交互式菜单共用 `execute`。

use std::fmt;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use tracing::{error, info};
use txseed_shared::error::SeedError;

use super::commands::OutputTarget;
use crate::service::SeedService;
use crate::sinks::UserStore;

/// 一次生成请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub count: usize,
    pub target: OutputTarget,
    pub connection: Option<String>,
    pub filename: Option<String>,
}

/// 生成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// 已写入 JSON 文件
    File { path: PathBuf, count: usize },
    /// 已写入 MongoDB
    Store { inserted: u64 },
}

impl fmt::Display for GenerateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { path, count } => {
                write!(f, "数据已成功保存到 {}（共 {} 条）", path.display(), count)
            }
            Self::Store { inserted } => write!(f, "数据插入成功！共 {} 条", inserted),
        }
    }
}

/// 执行一次生成请求
///
/// MongoDB 模式下先建立连接再生成数据，连接失败时不做无用的生成。
pub async fn execute(
    service: &SeedService,
    request: &GenerateRequest,
) -> Result<GenerateOutcome, SeedError> {
    info!(
        count = request.count,
        output = request.target.name(),
        "执行生成请求"
    );

    let outcome = match request.target {
        OutputTarget::Mongo => {
            let store = service
                .connect_store(request.connection.as_deref())
                .await?;
            let inserted = insert_then_close(service, request.count, &store).await?;
            GenerateOutcome::Store { inserted }
        }
        OutputTarget::Json => {
            let path = service
                .save_json(request.count, request.filename.as_deref())
                .await?;
            GenerateOutcome::File {
                path,
                count: request.count,
            }
        }
    };

    Ok(outcome)
}

/// 生成并写入存储，无论成功与否都关闭连接
async fn insert_then_close(
    service: &SeedService,
    count: usize,
    store: &dyn UserStore,
) -> Result<u64, SeedError> {
    let result = service.save_to_store(count, store).await;
    store.close().await;
    result
}

/// 命令执行器
///
/// 参数模式下只执行一次请求，失败时记录日志并返回错误。
pub struct CommandRunner {
    service: SeedService,
}

impl CommandRunner {
    /// 创建命令执行器
    pub fn new(service: SeedService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &SeedService {
        &self.service
    }

    /// 执行 `--generate` 请求
    pub async fn run_generate(&self, request: GenerateRequest) -> Result<GenerateOutcome> {
        match execute(&self.service, &request).await {
            Ok(outcome) => {
                info!(%outcome, "生成完成");
                println!("{}", outcome);
                Ok(outcome)
            }
            Err(e) => {
                error!(error = %e, output = request.target.name(), "生成失败");
                Err(anyhow!(e).context(failure_message(request.target)))
            }
        }
    }
}

/// 面向用户的失败提示
pub fn failure_message(target: OutputTarget) -> &'static str {
    match target {
        OutputTarget::Mongo => "写入 MongoDB 失败",
        OutputTarget::Json => "保存 JSON 文件失败",
    }
}

// ============================================================================
// 单元测试
// ============================================================================
