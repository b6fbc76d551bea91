//! # 批量执行器
//!
//! 以有界并发对文件列表执行处理函数（每个文件一次外部进程调用）。
//!
//! ## 功能
//! - rayon 线程池，线程数 = 并发上限
//! - 派发前先获取许可，池满时派发方阻塞（不会无限排队）
//! - 首个失败后停止派发；已在执行的调用不取消
//! - 所有已派发的调用结束后才返回（join 屏障）
//! - 进度条显示，日志经 `ProgressBar::suspend` 输出
//!
//! ## 依赖关系
//! - 被 `commands/format.rs` 调用
//! - 使用 `batch/permits.rs` 限制并发
//! - 使用 `utils/progress.rs`, `utils/output.rs`

use super::permits::PermitPool;
use crate::error::{DevdoError, Result};
use crate::utils::{output, progress};

use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// 单次调用留下的日志
#[derive(Debug, Clone, Default)]
pub struct ProcessLog {
    /// 执行的命令行
    pub command: String,
    /// 合并后的 stdout/stderr
    pub output: String,
}

/// 批量执行统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 已派发数量
    pub submitted: usize,
    /// 成功数量
    pub succeeded: usize,
    /// 耗时
    pub elapsed: Duration,
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器，`jobs == 0` 表示使用逻辑 CPU 数
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理文件列表；任一文件失败则整批失败，返回首个错误
    pub fn run<F>(&self, files: &[PathBuf], processor: F) -> Result<BatchResult>
    where
        F: Fn(&Path) -> Result<ProcessLog> + Sync,
    {
        let started = Instant::now();
        if files.is_empty() {
            return Ok(BatchResult::default());
        }

        let pb = if self.show_progress {
            progress::create_progress_bar(files.len() as u64, "Formatting")
        } else {
            indicatif::ProgressBar::hidden()
        };

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .thread_name(|i| format!("devdo-worker-{}", i))
            .build()
            .map_err(|e| DevdoError::Other(format!("Failed to build thread pool: {}", e)))?;

        let permits = PermitPool::new(self.jobs);
        let aborted = AtomicBool::new(false);
        let succeeded = AtomicUsize::new(0);
        let failure: Mutex<Option<DevdoError>> = Mutex::new(None);
        let mut submitted = 0;

        // in_place_scope: 派发循环留在当前线程，工作线程全部用于执行
        pool.in_place_scope(|scope| {
            for file in files {
                let permit = permits.acquire();
                if aborted.load(Ordering::SeqCst) {
                    break;
                }
                submitted += 1;

                let (processor, pb, aborted, succeeded, failure) =
                    (&processor, &pb, &aborted, &succeeded, &failure);
                scope.spawn(move |_| {
                    // 最后析构：先记录结果，再归还许可
                    let _permit = permit;
                    match processor(file.as_path()) {
                        Ok(log) => {
                            succeeded.fetch_add(1, Ordering::SeqCst);
                            pb.suspend(|| {
                                output::print_command(&log.command);
                                output::print_command_output(&log.output);
                            });
                        }
                        Err(e) => {
                            aborted.store(true, Ordering::SeqCst);
                            if let Some(later) = keep_first(failure, e) {
                                pb.suspend(|| output::print_error(&later.to_string()));
                            }
                        }
                    }
                    pb.inc(1);
                });
            }
        });

        pb.finish_and_clear();

        if let Some(e) = failure.into_inner() {
            return Err(e);
        }

        Ok(BatchResult {
            submitted,
            succeeded: succeeded.into_inner(),
            elapsed: started.elapsed(),
        })
    }
}

/// 只保留首个错误；之后的错误原样返回给调用方打印
fn keep_first(slot: &Mutex<Option<DevdoError>>, e: DevdoError) -> Option<DevdoError> {
    let mut slot = slot.lock();
    if slot.is_none() {
        *slot = Some(e);
        None
    } else {
        Some(e)
    }
}
