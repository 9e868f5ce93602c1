//! 数据生成服务
//!
//! 组合记录生成器、并行驱动器和各输出端，对 CLI / 菜单提供稳定的调用接口。
//! 同一服务实例内的多次生成共享同一个卖家池。

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, instrument};
use txseed_shared::config::AppConfig;
use txseed_shared::error::{Result, SeedError};

use crate::generators::{LogProgress, ParallelBatchDriver, ProgressReporter, RecordGenerator};
use crate::models::User;
use crate::sinks::{JsonFileSink, MongoUserStore, UserStore};

/// 数据生成服务
pub struct SeedService {
    config: AppConfig,
    generator: Arc<RecordGenerator>,
    progress: Arc<dyn ProgressReporter>,
}

impl SeedService {
    /// 创建服务，默认通过日志上报进度
    pub fn new(config: AppConfig) -> Self {
        let generator = Arc::new(RecordGenerator::from_config(&config));
        Self {
            config,
            generator,
            progress: Arc::new(LogProgress),
        }
    }

    /// 替换进度上报方式
    pub fn with_progress(mut self, progress: Arc<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn generator(&self) -> &Arc<RecordGenerator> {
        &self.generator
    }

    /// 并行生成一批用户
    ///
    /// 生成是纯 CPU 计算，放到阻塞线程中执行，避免占用异步运行时
    pub async fn generate(&self, count: usize) -> Result<Vec<User>> {
        let generator = Arc::clone(&self.generator);
        let progress = Arc::clone(&self.progress);

        tokio::task::spawn_blocking(move || {
            ParallelBatchDriver::new(generator).generate_users_parallel(count, progress.as_ref())
        })
        .await
        .map_err(|e| SeedError::Internal(format!("生成任务异常退出: {}", e)))?
    }

    /// 生成并写入 JSON 文件，返回文件路径
    #[instrument(skip(self))]
    pub async fn save_json(&self, count: usize, filename: Option<&str>) -> Result<PathBuf> {
        info!("Generating data and saving to JSON file");
        let users = self.generate(count).await?;

        let sink = JsonFileSink::new(
            &self.config.output.directory,
            &self.config.output.default_filename,
        );
        sink.write(&users, filename)
    }

    /// 连接 MongoDB
    ///
    /// 连接串优先使用显式传入的值，其次为配置中的 `mongo.uri`
    pub async fn connect_store(&self, connection: Option<&str>) -> Result<MongoUserStore> {
        let uri = self.config.mongo_uri(connection).ok_or_else(|| {
            SeedError::InvalidInput("未提供 MongoDB 连接串（--connection 或 mongo.uri）".to_string())
        })?;

        MongoUserStore::connect(
            uri,
            &self.config.mongo_database,
            &self.config.mongo_collection,
            &self.config.mongo,
        )
        .await
    }

    /// 生成并批量写入存储，返回写入条数
    #[instrument(skip(self, store))]
    pub async fn save_to_store(&self, count: usize, store: &dyn UserStore) -> Result<u64> {
        info!("Generating data and saving to MongoDB");
        let users = self.generate(count).await?;
        store.insert_many(&users).await
    }

    /// 生成一个示例用户（同样会扩充卖家池）
    pub fn sample_user(&self) -> Result<User> {
        self.generator.generate_user()
    }
}
