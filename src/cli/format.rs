//! # format 子命令 CLI 定义
//!
//! 用 clang-format 原地格式化项目源码
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/format.rs`

use crate::config;
use clap::Args;
use std::path::PathBuf;

/// format 子命令参数
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Project root the patterns are resolved against
    #[arg(long, env = "DEVDO_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Glob pattern of files to format, relative to the root (repeatable, replaces the defaults)
    #[arg(short, long = "pattern", value_name = "GLOB")]
    pub patterns: Vec<String>,

    /// Extra case-insensitive path substring to skip (repeatable, added to the defaults)
    #[arg(short, long = "skip", value_name = "SUBSTRING")]
    pub skip: Vec<String>,

    /// Number of parallel clang-format processes (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Path to clang-format (skips PATH lookup)
    #[arg(long, env = "CLANG_FORMAT")]
    pub tool: Option<PathBuf>,

    /// Only show which files would be formatted
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl FormatArgs {
    /// 实际使用的模式列表
    pub fn effective_patterns(&self) -> Vec<String> {
        if self.patterns.is_empty() {
            config::owned(config::FORMAT_PATTERNS)
        } else {
            self.patterns.clone()
        }
    }

    /// 实际使用的排除列表
    pub fn effective_denylist(&self) -> Vec<String> {
        let mut list = config::owned(config::FORMAT_DENYLIST);
        list.extend(self.skip.iter().cloned());
        list
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> super::FormatArgs {
        match Cli::try_parse_from(args).unwrap().command {
            Commands::Format(args) => args,
            _ => panic!("expected format"),
        }
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["devdo", "format"]);
        assert_eq!(args.effective_patterns().len(), crate::config::FORMAT_PATTERNS.len());
        assert_eq!(args.effective_denylist().len(), crate::config::FORMAT_DENYLIST.len());
        assert_eq!(args.jobs, 0);
        assert!(!args.dry_run);
    }

    #[test]
    fn test_overrides() {
        let args = parse(&[
            "devdo", "format", "-p", "x/*.cpp", "-p", "y/*.h", "--skip", "generated", "-j", "2",
        ]);
        assert_eq!(args.effective_patterns(), vec!["x/*.cpp", "y/*.h"]);
        assert!(args.effective_denylist().contains(&"generated".to_string()));
        assert!(args.effective_denylist().contains(&"resource.h".to_string()));
        assert_eq!(args.jobs, 2);
    }
}
