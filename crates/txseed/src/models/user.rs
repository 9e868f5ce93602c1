//! 用户模型
//!
//! 消费者记录，内嵌 0 到若干笔交易。

use bson::{Bson, Document, doc};
use serde::{Deserialize, Serialize};

use super::Transaction;

/// 用户记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 18 位数字串
    pub consumer_id: String,
    pub age: i32,
    pub exact_distance: i32,
    pub score: i32,
    /// 为该用户新生成的 6 位卖家 ID
    pub seller_id: String,
    pub transactions: Vec<Transaction>,
}

impl User {
    /// 转换为 BSON 文档
    pub fn to_document(&self) -> Document {
        let transactions: Vec<Bson> = self
            .transactions
            .iter()
            .map(|tx| Bson::Document(tx.to_document()))
            .collect();

        doc! {
            "consumer_id": self.consumer_id.as_str(),
            "age": self.age,
            "exact_distance": self.exact_distance,
            "score": self.score,
            "seller_id": self.seller_id.as_str(),
            "transactions": transactions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user(tx_count: usize) -> User {
        let transactions = (0..tx_count)
            .map(|i| Transaction {
                transaction_id: format!("{:018}", i),
                seller_id: "221512".to_string(),
                seller_name: "SELLER0".to_string(),
                mcc: 5422,
                mcc_category: "AÇOUGUEIRO".to_string(),
                value: 10.5,
                date: Utc::now(),
                transaction_type: "CARD".to_string(),
            })
            .collect();

        User {
            consumer_id: "000000000000000001".to_string(),
            age: 30,
            exact_distance: 1500,
            score: 700,
            seller_id: "654321".to_string(),
            transactions,
        }
    }

    #[test]
    fn test_to_document_embeds_transactions() {
        let user = sample_user(2);
        let doc = user.to_document();

        assert_eq!(doc.get_str("consumer_id").unwrap(), "000000000000000001");
        assert_eq!(doc.get_i32("age").unwrap(), 30);
        assert_eq!(doc.get_str("seller_id").unwrap(), "654321");

        let txs = doc.get_array("transactions").unwrap();
        assert_eq!(txs.len(), 2);
        assert!(matches!(txs[0], Bson::Document(_)));
    }

    #[test]
    fn test_user_without_transactions() {
        let user = sample_user(0);
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["transactions"], serde_json::json!([]));
    }
}
