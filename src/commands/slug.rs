//! # slug 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/slug.rs` 定义的参数
//! - 使用 `utils/slug.rs`

use crate::cli::slug::SlugArgs;
use crate::error::Result;
use crate::utils::slug::urlify;

/// 执行 slug 命令，结果直接输出到 stdout 便于脚本使用
pub fn execute(args: SlugArgs) -> Result<()> {
    println!("{}", urlify(&args.text.join(" ")));
    Ok(())
}
