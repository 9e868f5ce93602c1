//! 终端进度显示

use std::io::{self, Write};

use crate::generators::ProgressReporter;

/// 在 stderr 上原地刷新 `生成用户: n/total`
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalProgress;

/// 渲染进度行
pub fn progress_line(completed: usize, total: usize) -> String {
    let percent = if total == 0 {
        100.0
    } else {
        completed as f64 / total as f64 * 100.0
    };
    format!("生成用户: {}/{} ({:.0}%)", completed, total, percent)
}

impl ProgressReporter for TerminalProgress {
    fn on_progress(&self, completed: usize, total: usize) {
        let mut stderr = io::stderr().lock();
        let _ = write!(stderr, "\r{}", progress_line(completed, total));
        let _ = stderr.flush();
    }

    fn on_finish(&self, total: usize) {
        if total > 0 {
            let _ = writeln!(io::stderr());
        }
    }
}
