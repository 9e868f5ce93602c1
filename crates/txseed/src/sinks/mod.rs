//! 输出模块
//!
//! - `json_file`: 写入本地 JSON 文件
//! - `document_store`: 批量写入 MongoDB

pub mod document_store;
pub mod json_file;

pub use document_store::{MongoUserStore, UserStore};
pub use json_file::{JsonFileSink, pretty_user};

#[cfg(test)]
pub use document_store::MockUserStore;
