//! 共享库
//!
//! 包含配置加载、错误类型、日志初始化与 MongoDB 连接等基础设施代码。

pub mod config;
pub mod database;
pub mod error;
pub mod observability;
