//! txseed CLI
//!
//! 数据生成器的命令行入口点。

use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use txseed::cli::{Cli, CommandRunner, GenerateRequest, Menu, TerminalProgress};
use txseed::service::SeedService;
use txseed_shared::config::AppConfig;
use txseed_shared::observability;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)
        .with_context(|| format!("加载配置失败: {}", cli.config))?;
    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.clone();
    }

    // 优先使用环境变量 RUST_LOG，其次命令行参数，最后是配置
    observability::init(&config.observability, cli.log_level.as_deref())?;
    info!(config = %cli.config, "Starting generator");

    let service = SeedService::new(config).with_progress(Arc::new(TerminalProgress));

    match cli.generate {
        Some(count) => {
            let runner = CommandRunner::new(service);
            runner
                .run_generate(GenerateRequest {
                    count,
                    target: cli.output.unwrap_or_default(),
                    connection: cli.connection,
                    filename: cli.filename,
                })
                .await?;
        }
        None => {
            let stdin = io::stdin();
            let mut menu = Menu::new(stdin.lock(), io::stdout());
            menu.run(&service).await?;
        }
    }

    Ok(())
}
