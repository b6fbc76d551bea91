//! # git 查询
//!
//! 部署前的分支与工作区检查。
//!
//! ## 依赖关系
//! - 被 `commands/website.rs` 使用
//! - 使用 `utils/process.rs`, `regex`

use crate::error::{DevdoError, Result};
use crate::utils::process;

use regex::Regex;
use std::path::Path;
use std::process::Command;

/// 从 `git branch` 输出中取出当前分支（带 `*` 的那一行）
pub fn parse_current_branch(out: &str) -> Option<String> {
    let re = Regex::new(r"(?m)^\*\s+(.+?)\s*$").ok()?;
    re.captures(out).map(|c| c[1].to_string())
}

/// 当前分支
pub fn current_branch(dir: &Path) -> Result<String> {
    let out = process::run_captured(Command::new("git").arg("branch").current_dir(dir))?;
    parse_current_branch(&out).ok_or_else(|| {
        DevdoError::Other(format!(
            "Can't determine current git branch in '{}'",
            dir.display()
        ))
    })
}

/// 工作区必须干净（`git status --porcelain` 无输出）
pub fn ensure_clean(dir: &Path) -> Result<()> {
    let out = process::run_captured(
        Command::new("git")
            .args(["status", "--porcelain"])
            .current_dir(dir),
    )?;
    if out.trim().is_empty() {
        Ok(())
    } else {
        Err(DevdoError::DirtyWorkingTree {
            path: dir.display().to_string(),
            status: out.trim_end().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_current_branch() {
        let out = "  master\n* website-cf\n  feature/x\n";
        assert_eq!(parse_current_branch(out), Some("website-cf".to_string()));
    }

    #[test]
    fn test_parse_detached_head() {
        let out = "* (HEAD detached at 1a2b3c)\n  master\n";
        assert_eq!(
            parse_current_branch(out),
            Some("(HEAD detached at 1a2b3c)".to_string())
        );
    }

    #[test]
    fn test_parse_no_branch() {
        assert_eq!(parse_current_branch(""), None);
        assert_eq!(parse_current_branch("  master\n"), None);
    }
}
