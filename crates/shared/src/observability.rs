//! 日志初始化模块
//!
//! 基于 tracing-subscriber 构建日志输出，支持 pretty / json 两种格式。
//! 交互模式下日志默认写入文件，避免与菜单输出交错。

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;

/// 初始化全局日志
///
/// `RUST_LOG` 优先于配置中的日志级别；`level_override` 用于命令行显式指定的级别。
pub fn init(config: &ObservabilityConfig, level_override: Option<&str>) -> Result<()> {
    let level = level_override.unwrap_or(&config.log_level);

    // 构建环境过滤器
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let json = config.log_format.eq_ignore_ascii_case("json");

    let fmt_layer = match config.log_file.as_deref().filter(|p| !p.is_empty()) {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("打开日志文件失败: {}", path))?;
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true);
            if json { layer.json().boxed() } else { layer.boxed() }
        }
        None => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true);
            if json { layer.json().boxed() } else { layer.boxed() }
        }
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("初始化日志失败")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_with_file_then_reinit_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let config = ObservabilityConfig {
            log_level: "debug".to_string(),
            log_format: "json".to_string(),
            log_file: Some(path.to_string_lossy().into_owned()),
        };

        init(&config, None).unwrap();
        assert!(path.exists());

        // 全局订阅者只能设置一次
        assert!(init(&config, Some("info")).is_err());
    }

    #[test]
    fn test_init_unwritable_log_file() {
        let config = ObservabilityConfig {
            log_file: Some("/nonexistent/dir/app.log".to_string()),
            ..Default::default()
        };
        assert!(init(&config, None).is_err());
    }
}
