//! 并行批量生成
//!
//! 在固定大小的 rayon 线程池上并行执行 N 个相互独立的用户生成任务，
//! 按完成顺序收集结果并上报进度。

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::mpsc;
use std::time::Instant;

use rayon::ThreadPoolBuilder;
use tracing::{error, info};
use txseed_shared::error::{Result, SeedError};

use super::record_generator::RecordGenerator;
use crate::models::User;

/// 进度上报接口
pub trait ProgressReporter: Send + Sync {
    /// 每完成一个任务调用一次
    fn on_progress(&self, completed: usize, total: usize);

    /// 批次全部完成
    fn on_finish(&self, _total: usize) {}
}

/// 不上报进度
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn on_progress(&self, _completed: usize, _total: usize) {}
}

/// 通过日志上报进度，大约每 10% 记录一次
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressReporter for LogProgress {
    fn on_progress(&self, completed: usize, total: usize) {
        let step = (total / 10).max(1);
        if completed % step == 0 || completed == total {
            info!(completed, total, "Generating users");
        }
    }
}

/// 默认工作线程数：主机可用并行度
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// 并行批量驱动器
pub struct ParallelBatchDriver {
    generator: Arc<RecordGenerator>,
    workers: usize,
}

impl ParallelBatchDriver {
    /// 创建驱动器，线程数取生成配置或主机并行度
    pub fn new(generator: Arc<RecordGenerator>) -> Self {
        let workers = generator
            .settings()
            .workers
            .unwrap_or_else(default_workers);
        Self {
            generator,
            workers: workers.max(1),
        }
    }

    /// 覆盖工作线程数
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// 并行生成 `count` 个用户
    ///
    /// 返回顺序为任务完成顺序。任一任务失败时整个批次失败，
    /// 已完成的结果被丢弃；其余已提交的任务仍会在线程池中跑完。
    pub fn generate_users_parallel(
        &self,
        count: usize,
        progress: &dyn ProgressReporter,
    ) -> Result<Vec<User>> {
        if count == 0 {
            progress.on_finish(0);
            return Ok(Vec::new());
        }

        let started = Instant::now();
        info!(count, workers = self.workers, "开始并行生成用户");

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("txseed-worker-{}", i))
            .panic_handler(|_| error!("生成任务 panic"))
            .build()?;

        let (tx, rx) = mpsc::channel();
        for _ in 0..count {
            let tx = tx.clone();
            let generator = Arc::clone(&self.generator);
            pool.spawn(move || {
                // 接收端关闭说明批次已失败，结果直接丢弃
                let _ = tx.send(generator.generate_user());
            });
        }
        drop(tx);

        let mut users = Vec::with_capacity(count);
        for completed in 1..=count {
            let user = rx.recv().map_err(|_| SeedError::WorkerDisconnected {
                completed: completed - 1,
                total: count,
            })??;
            users.push(user);
            progress.on_progress(completed, count);
        }
        progress.on_finish(count);

        info!(
            count,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "用户生成完成"
        );
        Ok(users)
    }
}
