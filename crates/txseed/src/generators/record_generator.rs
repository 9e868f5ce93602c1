//! 记录生成器
//!
//! 基于配置中的参考数据（卖家、MCC、交易类型）生成单笔交易和单个用户。

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;
use txseed_shared::config::{AppConfig, GenerationConfig, MccEntry};
use txseed_shared::error::{Result, SeedError};

use super::number_factory::{digits, decimal, random_datetime_with};
use super::seller_pool::SellerPool;
use crate::models::{Transaction, User};

/// 交易 ID / 消费者 ID 位数
const ID_LENGTH: usize = 18;
/// 卖家 ID 位数
const SELLER_ID_LENGTH: usize = 6;

/// 参考数据
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub sellers: Vec<String>,
    pub mcc_dict: Vec<MccEntry>,
    pub transaction_types: Vec<String>,
}

impl ReferenceData {
    /// 从应用配置中提取参考数据
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            sellers: config.sellers.clone(),
            mcc_dict: config.mcc_dict.clone(),
            transaction_types: config.transaction_types.clone(),
        }
    }
}

/// 记录生成器
///
/// 可在多个工作线程间共享（`Arc<RecordGenerator>`）。
/// 每次生成用户都会向卖家池追加一个新卖家，后续交易可能选中它。
#[derive(Debug)]
pub struct RecordGenerator {
    sellers: SellerPool,
    mcc_dict: Vec<MccEntry>,
    transaction_types: Vec<String>,
    settings: GenerationConfig,
}

impl RecordGenerator {
    /// 创建记录生成器
    pub fn new(reference: ReferenceData, settings: GenerationConfig) -> Self {
        Self {
            sellers: SellerPool::new(reference.sellers),
            mcc_dict: reference.mcc_dict,
            transaction_types: reference.transaction_types,
            settings,
        }
    }

    /// 使用应用配置创建
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(ReferenceData::from_config(config), config.generation.clone())
    }

    /// 生成单笔交易
    ///
    /// 任一参考列表为空时返回 `EmptyReferenceData`
    pub fn generate_transaction(&self) -> Result<Transaction> {
        let mut rng = rand::thread_rng();

        let (pos, seller_id) = self
            .sellers
            .pick(&mut rng)
            .ok_or(SeedError::EmptyReferenceData { list: "SELLERS" })?;
        let mcc = self
            .mcc_dict
            .choose(&mut rng)
            .ok_or(SeedError::EmptyReferenceData { list: "MCC_DICT" })?;
        let transaction_type = self
            .transaction_types
            .choose(&mut rng)
            .ok_or(SeedError::EmptyReferenceData {
                list: "TRANSACTION_TYPES",
            })?;

        Ok(Transaction {
            transaction_id: digits(&mut rng, ID_LENGTH),
            seller_id,
            seller_name: format!("SELLER{}", pos),
            mcc: mcc.mcc,
            mcc_category: mcc.category.clone(),
            value: decimal(&mut rng),
            date: random_datetime_with(&mut rng, self.settings.transaction_window_days),
            transaction_type: transaction_type.clone(),
        })
    }

    /// 生成 `count` 笔交易
    pub fn generate_transactions(&self, count: usize) -> Result<Vec<Transaction>> {
        debug!(count, "Generating transactions");
        (0..count).map(|_| self.generate_transaction()).collect()
    }

    /// 生成单个用户
    ///
    /// 先生成新卖家 ID 并追加到卖家池，再基于扩充后的池生成 0 到上限笔交易。
    pub fn generate_user(&self) -> Result<User> {
        let mut rng = rand::thread_rng();

        let seller_id = digits(&mut rng, SELLER_ID_LENGTH);
        let pool_size = self.sellers.push(seller_id.clone());
        debug!(seller_id = %seller_id, pool_size, "Generating user");

        let consumer_id = digits(&mut rng, ID_LENGTH);
        let age = rng.gen_range(16..=99);
        let exact_distance = rng.gen_range(1000..=10000);
        let score = rng.gen_range(100..=1000);
        let tx_count = rng.gen_range(0..=self.settings.max_transactions_per_user);

        Ok(User {
            consumer_id,
            age,
            exact_distance,
            score,
            seller_id,
            transactions: self.generate_transactions(tx_count)?,
        })
    }

    /// 共享卖家池
    pub fn seller_pool(&self) -> &SellerPool {
        &self.sellers
    }

    pub fn settings(&self) -> &GenerationConfig {
        &self.settings
    }
}
