//! # 批量处理模块
//!
//! 提供有界并发的文件批量处理能力。
//!
//! ## 功能
//! - 展开模式并按排除列表过滤
//! - 许可池限制同时运行的外部进程数
//! - 并行处理与 join 屏障
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/format.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod permits;
pub mod runner;

pub use collector::{relative_display, Denylist, FileCollector, FormatPlan};
pub use runner::{BatchResult, BatchRunner, ProcessLog};
