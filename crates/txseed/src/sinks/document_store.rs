//! 文档数据库输出
//!
//! 通过一次 `insert_many` 将整批用户写入 MongoDB，不做逐条重试。

use async_trait::async_trait;
use bson::Document;
use tracing::{error, info};
use txseed_shared::config::MongoConfig;
use txseed_shared::database::MongoConnection;
use txseed_shared::error::{Result, SeedError};

use crate::models::User;

/// 用户存储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 批量写入，返回写入条数
    async fn insert_many(&self, users: &[User]) -> Result<u64>;

    /// 关闭底层连接
    async fn close(&self);
}

/// MongoDB 用户存储
pub struct MongoUserStore {
    connection: MongoConnection,
}

impl MongoUserStore {
    /// 连接 MongoDB 并定位到目标集合
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
        config: &MongoConfig,
    ) -> Result<Self> {
        let connection = MongoConnection::connect(uri, database, collection, config)
            .await
            .inspect_err(|e| error!(error = %e, "Error connecting to MongoDB"))?;
        Ok(Self { connection })
    }

}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert_many(&self, users: &[User]) -> Result<u64> {
        if users.is_empty() {
            return Ok(0);
        }

        let documents: Vec<Document> = users.iter().map(User::to_document).collect();
        let result = self
            .connection
            .collection()
            .insert_many(documents)
            .await
            .map_err(|e| {
                error!(error = %e, "Error inserting data into MongoDB");
                SeedError::Insert(e)
            })?;

        let inserted = result.inserted_ids.len() as u64;
        info!(inserted, "Data successfully inserted into MongoDB");
        Ok(inserted)
    }

    async fn close(&self) {
        self.connection.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_failure_surfaces() {
        let result =
            MongoUserStore::connect("invalid://uri", "db", "users", &MongoConfig::default()).await;
        assert!(matches!(result, Err(SeedError::Connection(_))));
    }

    #[tokio::test]
    #[ignore] // 需要 MongoDB 连接
    async fn test_insert_many_roundtrip() {
        use crate::generators::{RecordGenerator, ReferenceData};
        use txseed_shared::config::{GenerationConfig, MccEntry};

        let uri = std::env::var("TEST_MONGO_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let store = MongoUserStore::connect(&uri, "txseed_test", "users", &MongoConfig::default())
            .await
            .unwrap();

        let generator = RecordGenerator::new(
            ReferenceData {
                sellers: vec!["221512".to_string()],
                mcc_dict: vec![MccEntry {
                    mcc: 5462,
                    category: "PADARIA".to_string(),
                }],
                transaction_types: vec!["PIX".to_string()],
            },
            GenerationConfig::default(),
        );
        let users: Vec<User> = (0..3).map(|_| generator.generate_user().unwrap()).collect();

        assert_eq!(store.insert_many(&users).await.unwrap(), 3);
        assert_eq!(store.insert_many(&[]).await.unwrap(), 0);
        store.close().await;
    }
}
