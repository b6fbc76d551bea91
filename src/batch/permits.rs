//! # 并发许可池
//!
//! 固定容量的计数信号量。提交方在派发任务前获取许可，
//! 池满时阻塞；许可随 [`Permit`] 析构归还，失败路径同样归还。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 使用 `parking_lot` 的 `Mutex` / `Condvar`

use parking_lot::{Condvar, Mutex};

/// 许可池
#[derive(Debug)]
pub struct PermitPool {
    capacity: usize,
    available: Mutex<usize>,
    released: Condvar,
}

impl PermitPool {
    /// 创建容量为 `capacity` 的许可池（至少为 1）
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            available: Mutex::new(capacity),
            released: Condvar::new(),
        }
    }

    /// 当前空闲许可数
    #[cfg(test)]
    pub fn available(&self) -> usize {
        *self.available.lock()
    }

    /// 获取一个许可，没有空闲许可时阻塞
    pub fn acquire(&self) -> Permit<'_> {
        let mut available = self.available.lock();
        while *available == 0 {
            self.released.wait(&mut available);
        }
        *available -= 1;
        Permit { pool: self }
    }

    fn release(&self) {
        let mut available = self.available.lock();
        *available += 1;
        debug_assert!(*available <= self.capacity);
        self.released.notify_one();
    }
}

/// 持有中的许可，析构时归还
#[derive(Debug)]
pub struct Permit<'a> {
    pool: &'a PermitPool,
}

impl Drop for Permit<'_> {
    fn drop(&mut self) {
        self.pool.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_zero_capacity_is_clamped() {
        let pool = PermitPool::new(0);
        assert_eq!(pool.available(), 1);
        let _p = pool.acquire();
        assert_eq!(pool.available(), 0);
    }

    #[test]
    fn test_permit_released_on_drop() {
        let pool = PermitPool::new(2);
        {
            let _a = pool.acquire();
            let _b = pool.acquire();
            assert_eq!(pool.available(), 0);
        }
        assert_eq!(pool.available(), 2);
    }

    #[test]
    fn test_permit_released_on_panic() {
        let pool = PermitPool::new(1);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _p = pool.acquire();
            panic!("worker failed");
        }));
        assert!(result.is_err());
        assert_eq!(pool.available(), 1);
    }

    #[test]
    fn test_acquire_blocks_until_release() {
        let pool = PermitPool::new(1);
        let acquired = AtomicBool::new(false);

        thread::scope(|s| {
            let held = pool.acquire();
            s.spawn(|| {
                let _p = pool.acquire();
                acquired.store(true, Ordering::SeqCst);
            });
            thread::sleep(Duration::from_millis(50));
            assert!(!acquired.load(Ordering::SeqCst));
            drop(held);
        });

        assert!(acquired.load(Ordering::SeqCst));
        assert_eq!(pool.available(), 1);
    }
}
