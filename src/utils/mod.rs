//! # 工具函数模块
//!
//! 提供美化输出、进度条、外部进程、工具定位、下载校验、git 查询、命令序列等工具。
//!
//! ## 依赖关系
//! - 被 `batch/` 与 `commands/` 模块使用
//! - 子模块: output, progress, process, locate, download, git, sequence, slug

pub mod download;
pub mod git;
pub mod locate;
pub mod output;
pub mod process;
pub mod progress;
pub mod sequence;
pub mod slug;
