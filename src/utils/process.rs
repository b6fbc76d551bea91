//! # 外部进程工具
//!
//! 运行外部命令并收集输出。所有失败都转换为 `DevdoError`。
//!
//! ## 依赖关系
//! - 被 `commands/format.rs`, `commands/website.rs` 使用
//! - 使用 `utils/output.rs` 打印命令与输出

use crate::error::{DevdoError, Result};
use crate::utils::output;

use std::io::ErrorKind;
use std::process::{Command, Output};

/// 命令行的可读形式：`program arg1 arg2`
pub fn command_line(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    for arg in cmd.get_args() {
        let arg = arg.to_string_lossy();
        if arg.contains(' ') {
            parts.push(format!("\"{}\"", arg));
        } else {
            parts.push(arg.into_owned());
        }
    }
    parts.join(" ")
}

/// 合并 stdout 与 stderr
fn combined(out: &Output) -> String {
    let mut text = String::from_utf8_lossy(&out.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&out.stderr);
    if !stderr.trim().is_empty() {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&stderr);
    }
    text
}

fn spawn_output(cmd: &mut Command) -> Result<Output> {
    let line = command_line(cmd);
    cmd.output().map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            DevdoError::CommandNotFound { command: line }
        } else {
            DevdoError::CommandSpawn {
                command: line,
                source: e,
            }
        }
    })
}

/// 运行命令，返回合并输出；非零退出视为失败。不打印任何内容。
pub fn run_combined(cmd: &mut Command) -> Result<String> {
    let out = spawn_output(cmd)?;
    let text = combined(&out);
    if !out.status.success() {
        return Err(DevdoError::CommandFailed {
            command: command_line(cmd),
            status: out.status.to_string(),
            output: text,
        });
    }
    Ok(text)
}

/// 打印命令，运行并打印其合并输出
pub fn run_logged(cmd: &mut Command) -> Result<String> {
    output::print_command(&command_line(cmd));
    let text = run_combined(cmd)?;
    output::print_command_output(&text);
    Ok(text)
}

/// 运行查询类命令，只返回 stdout
pub fn run_captured(cmd: &mut Command) -> Result<String> {
    let out = spawn_output(cmd)?;
    if !out.status.success() {
        return Err(DevdoError::CommandFailed {
            command: command_line(cmd),
            status: out.status.to_string(),
            output: combined(&out),
        });
    }
    Ok(String::from_utf8_lossy(&out.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_quotes_spaces() {
        let mut cmd = Command::new("clang-format");
        cmd.args(["-i", "-style=file", "src/My File.cpp"]);
        assert_eq!(
            command_line(&cmd),
            "clang-format -i -style=file \"src/My File.cpp\""
        );
    }

    #[test]
    fn test_missing_program() {
        let err = run_combined(&mut Command::new("devdo-no-such-program-xyz")).unwrap_err();
        assert!(matches!(err, DevdoError::CommandNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_combined_output_and_failure() {
        let out = run_combined(Command::new("sh").args(["-c", "echo out; echo err 1>&2"])).unwrap();
        assert!(out.contains("out"));
        assert!(out.contains("err"));

        let err = run_combined(Command::new("sh").args(["-c", "echo bad 1>&2; exit 3"])).unwrap_err();
        match err {
            DevdoError::CommandFailed { output, status, .. } => {
                assert!(output.contains("bad"));
                assert!(status.contains('3'));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_captured_stdout_only() {
        let out = run_captured(Command::new("sh").args(["-c", "echo out; echo err 1>&2"])).unwrap();
        assert_eq!(out.trim(), "out");
    }
}
