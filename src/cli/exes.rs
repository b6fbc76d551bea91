//! # list-exes 子命令 CLI 定义
//!
//! 列出目录下的可执行文件（.exe / .bat / .cmd）
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/exes.rs`

use crate::config;
use clap::Args;
use std::path::PathBuf;

/// list-exes 子命令参数
#[derive(Args, Debug)]
pub struct ExesArgs {
    /// Directory to search recursively
    pub dir: PathBuf,

    /// Case-insensitive name substring to repeat at the end of the listing (repeatable)
    #[arg(long = "remember", value_name = "SUBSTRING")]
    pub remember: Vec<String>,
}

impl ExesArgs {
    pub fn effective_remember(&self) -> Vec<String> {
        if self.remember.is_empty() {
            config::owned(config::REMEMBER_EXES)
        } else {
            self.remember.clone()
        }
    }
}
