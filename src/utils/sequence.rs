//! # 命令序列
//!
//! 严格按顺序执行的一组外部命令，任一步失败即中止剩余步骤。
//! 部署（git / netlify）都用它来描述。
//!
//! ## 依赖关系
//! - 被 `commands/website.rs` 使用
//! - 使用 `utils/process.rs`, `utils/output.rs`

use crate::error::Result;
use crate::utils::{output, process};

use std::path::{Path, PathBuf};
use std::process::Command;

/// 单个步骤
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub program: String,
    pub args: Vec<String>,
}

impl Step {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn command(&self, dir: Option<&Path>) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", process::command_line(&self.command(None)))
    }
}

/// 命令序列
#[derive(Debug, Clone, Default)]
pub struct CommandSequence {
    steps: Vec<Step>,
    /// 工作目录，`None` 表示当前目录
    dir: Option<PathBuf>,
}

impl CommandSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn step<I, S>(mut self, program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps.push(Step::new(program, args));
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// 只打印步骤，不执行
    pub fn print(&self) {
        for step in self.steps() {
            output::print_info(&format!("[DRY] {}", step));
        }
    }

    /// 依次执行；返回已完成的步骤数
    pub fn run(&self) -> Result<usize> {
        for (done, step) in self.steps.iter().enumerate() {
            let mut cmd = step.command(self.dir.as_deref());
            if let Err(e) = process::run_logged(&mut cmd) {
                output::print_warning(&format!(
                    "Step {}/{} failed, {} remaining step(s) not run",
                    done + 1,
                    self.steps.len(),
                    self.steps.len() - done - 1
                ));
                return Err(e);
            }
        }
        Ok(self.steps.len())
    }
}
