//! 数据模型
//!
//! 生成的用户与交易记录。记录在生成后立即序列化，不作为可变对象长期持有。

pub mod transaction;
pub mod user;

pub use transaction::Transaction;
pub use user::User;
