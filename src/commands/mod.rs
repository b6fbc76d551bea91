//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `utils/`, `config.rs`
//! - 子模块: format, download, slug, website, exes

pub mod download;
pub mod exes;
pub mod format;
pub mod slug;
pub mod website;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Format(args) => format::execute(args),
        Commands::Download(args) => download::execute(args),
        Commands::Slug(args) => slug::execute(args),
        Commands::Website(args) => website::execute(args),
        Commands::ListExes(args) => exes::execute(args),
    }
}
