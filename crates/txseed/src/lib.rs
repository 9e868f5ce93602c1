//! 用户与交易测试数据生成器
//!
//! 随机生成带嵌套交易记录的用户，并写入 MongoDB 或 JSON 文件。
//!
//! # 主要模块
//!
//! - `generators`: 数字工厂、卖家池、记录生成器与并行批量驱动
//! - `models`: 用户与交易数据模型
//! - `sinks`: JSON 文件与 MongoDB 输出
//! - `service`: 组合生成与输出的服务层
//! - `cli`: 命令行参数与交互式菜单
//!
//! # 使用示例
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use txseed::generators::{NoProgress, ParallelBatchDriver, RecordGenerator};
//! use txseed_shared::config::AppConfig;
//!
//! let config = AppConfig::load("config.json").unwrap();
//! let generator = Arc::new(RecordGenerator::from_config(&config));
//! let driver = ParallelBatchDriver::new(generator);
//! let users = driver.generate_users_parallel(100, &NoProgress).unwrap();
//! assert_eq!(users.len(), 100);
//! ```

pub mod cli;
pub mod generators;
pub mod models;
pub mod service;
pub mod sinks;
