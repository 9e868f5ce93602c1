//! 卖家池
//!
//! 一次运行内所有工作线程共享的卖家 ID 列表。只追加不删除，
//! 追加持写锁，抽取持读锁，新追加的 ID 对后续生成立即可见。

use parking_lot::RwLock;
use rand::Rng;

/// 共享卖家池
#[derive(Debug, Default)]
pub struct SellerPool {
    sellers: RwLock<Vec<String>>,
}

impl SellerPool {
    /// 使用配置中的初始卖家创建
    pub fn new(initial: Vec<String>) -> Self {
        Self {
            sellers: RwLock::new(initial),
        }
    }

    /// 追加卖家 ID，返回追加后的池大小
    pub fn push(&self, seller_id: String) -> usize {
        let mut sellers = self.sellers.write();
        sellers.push(seller_id);
        sellers.len()
    }

    /// 随机抽取一个卖家，返回其位置与 ID
    ///
    /// 池为空时返回 None
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(usize, String)> {
        let sellers = self.sellers.read();
        if sellers.is_empty() {
            return None;
        }
        let pos = rng.gen_range(0..sellers.len());
        Some((pos, sellers[pos].clone()))
    }

    pub fn len(&self) -> usize {
        self.sellers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sellers.read().is_empty()
    }

    pub fn contains(&self, seller_id: &str) -> bool {
        self.sellers.read().iter().any(|s| s == seller_id)
    }

    /// 当前池内容的副本
    pub fn snapshot(&self) -> Vec<String> {
        self.sellers.read().clone()
    }
}
