//! # slug 子命令 CLI 定义
//!
//! 把标题转换为 URL 安全的 slug
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/slug.rs`

use clap::Args;

/// slug 子命令参数
#[derive(Args, Debug)]
pub struct SlugArgs {
    /// Text to convert (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}
