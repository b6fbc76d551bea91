//! # download 子命令 CLI 定义
//!
//! 按 CSV 清单下载文件并校验 SHA-1
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/download.rs`

use clap::Args;
use std::path::PathBuf;

/// download 子命令参数
#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// CSV manifest with columns: name,url,sha1
    pub manifest: PathBuf,

    /// Directory the files are downloaded into
    #[arg(short, long, default_value = ".")]
    pub dest: PathBuf,
}
