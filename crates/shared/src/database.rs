//! MongoDB 连接管理模块
//!
//! 封装客户端、数据库和集合句柄，连接时通过 ping 确认服务可达。

use std::time::Duration;

use mongodb::bson::{Document, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::{info, instrument};

use crate::config::MongoConfig;
use crate::error::{Result, SeedError};

/// MongoDB 连接包装
#[derive(Clone)]
pub struct MongoConnection {
    client: Client,
    database: Database,
    collection: Collection<Document>,
}

impl MongoConnection {
    /// 建立连接并获取集合句柄
    ///
    /// 驱动本身是惰性连接的，这里额外执行一次 `ping`，
    /// 使不可达的服务在连接阶段（而非写入阶段）报错。
    #[instrument(skip(uri, config))]
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
        config: &MongoConfig,
    ) -> Result<Self> {
        info!("Connecting to MongoDB...");

        let timeout = Duration::from_secs(config.connect_timeout_seconds);
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(SeedError::Connection)?;
        options.app_name = Some(config.app_name.clone());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options).map_err(SeedError::Connection)?;
        let database = client.database(database);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(SeedError::Connection)?;

        let collection = database.collection::<Document>(collection);
        info!("Connected to MongoDB");

        Ok(Self {
            client,
            database,
            collection,
        })
    }

    /// 获取目标集合
    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }

    /// 数据库名称
    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    /// 健康检查
    pub async fn health_check(&self) -> Result<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(SeedError::Connection)
    }

    /// 关闭客户端
    ///
    /// `Client` 内部共享连接池，关闭一个克隆即关闭全部
    pub async fn close(&self) {
        self.client.clone().shutdown().await;
        info!("MongoDB client closed");
    }
}
