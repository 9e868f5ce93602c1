//! 交易模型
//!
//! 单笔交易记录，字段名与下游存储约定保持一致（`transactionId`、`mccCategory`、`type`）。

use bson::{Document, doc};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 交易记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// 18 位数字串
    #[serde(rename = "transactionId")]
    pub transaction_id: String,
    pub seller_id: String,
    /// `SELLER<序号>`，序号为卖家在卖家池中的位置
    pub seller_name: String,
    pub mcc: i64,
    #[serde(rename = "mccCategory")]
    pub mcc_category: String,
    pub value: f64,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub transaction_type: String,
}

impl Transaction {
    /// 转换为 BSON 文档，`date` 写为原生日期类型
    pub fn to_document(&self) -> Document {
        doc! {
            "transactionId": self.transaction_id.as_str(),
            "seller_id": self.seller_id.as_str(),
            "seller_name": self.seller_name.as_str(),
            "mcc": self.mcc,
            "mccCategory": self.mcc_category.as_str(),
            "value": self.value,
            "date": bson::DateTime::from_chrono(self.date),
            "type": self.transaction_type.as_str(),
        }
    }
}
