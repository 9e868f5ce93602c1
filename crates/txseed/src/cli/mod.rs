//! CLI 模块
//!
//! 提供两种运行方式：
//!
//! - 参数模式：提供 `--generate` 时执行一次生成后退出
//! - 菜单模式：未提供 `--generate` 时进入交互式菜单
//!
//! # 使用示例
//!
//! ```bash
//! # 生成 100 个用户并保存为 output_json/dados.json
//! txseed --generate 100 --output json --filename dados
//!
//! # 生成 1000 个用户并写入 MongoDB
//! txseed --generate 1000 --output mongo --connection mongodb://localhost:27017
//!
//! # 交互式菜单
//! txseed -c config.json
//! ```

pub mod commands;
pub mod menu;
pub mod progress;
pub mod runner;

pub use commands::{Cli, OutputTarget};
pub use menu::Menu;
pub use progress::TerminalProgress;
pub use runner::{CommandRunner, GenerateOutcome, GenerateRequest};
