//! 生成器模块
//!
//! 提供随机数工厂、记录生成器和并行批量驱动器。

pub mod batch;
pub mod number_factory;
pub mod record_generator;
pub mod seller_pool;

pub use batch::{LogProgress, NoProgress, ParallelBatchDriver, ProgressReporter, default_workers};
pub use number_factory::{GeneratedNumber, NumberKind, create_number, generate_random_datetime};
pub use record_generator::{RecordGenerator, ReferenceData};
pub use seller_pool::SellerPool;
